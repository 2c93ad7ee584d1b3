use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub schemas: SchemaStoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaStoreConfig {
    /// Directory holding one `{id}.xsd` file per supported schema.
    pub dir: PathBuf,
}

impl Config {
    /// Loads defaults, an optional TOML file named by `CP2K_XML_CONFIG`,
    /// and `CP2K_XML__`-prefixed environment variables, in that order.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080_i64)?
            .set_default("schemas.dir", "schemas")?;

        if let Ok(config_path) = std::env::var("CP2K_XML_CONFIG") {
            if !config_path.is_empty() {
                builder = builder.add_source(config::File::with_name(&config_path));
            }
        }

        builder = builder.add_source(config::Environment::with_prefix("CP2K_XML").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let config = Config::load().unwrap();
        assert!(!config.server.host.is_empty());
        assert_ne!(config.server.port, 0);
        assert!(!config.schemas.dir.as_os_str().is_empty());
    }
}
