use crate::config::Config;
use cp2k_xml::{AnnotationConfig, SchemaCatalog};
use std::sync::Arc;

/// Shared application state accessible to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Resolves schema identifiers to schema files.
    pub catalog: Arc<SchemaCatalog>,

    /// Configuration.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let catalog = SchemaCatalog::new(config.schemas.dir.clone(), AnnotationConfig::default());
        Self {
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
