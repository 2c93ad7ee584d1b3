use crate::error::ConvertError;
use cp2k_xml_grammar::{AnnotationConfig, GrammarTree};
use cp2k_xml_transform::transform_to_string;
use log::debug;
use std::io::BufRead;
use std::path::Path;

/// Runs conversions of CP2K text input against one schema.
///
/// The transformer owns the schema source text; each [`convert`] call parses
/// it, wraps the root element as a grammar tree and walks the input against
/// that tree. Tree population is lazy, so a conversion only ever pays for
/// the sections its input actually touches.
///
/// [`convert`]: InputTransformer::convert
pub struct InputTransformer {
    schema_source: String,
    config: AnnotationConfig,
}

impl InputTransformer {
    /// Builds a transformer from schema text already in memory.
    pub fn for_schema_source(schema_source: String, config: AnnotationConfig) -> Self {
        InputTransformer {
            schema_source,
            config,
        }
    }

    /// Builds a transformer by reading a schema file from disk.
    pub fn for_schema_file(
        path: &Path,
        config: AnnotationConfig,
    ) -> Result<Self, ConvertError> {
        debug!("constructing transformer for schema: {}", path.display());
        let schema_source =
            std::fs::read_to_string(path).map_err(|source| ConvertError::SchemaRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::for_schema_source(schema_source, config))
    }

    /// Converts one input stream into a serialized XML document.
    pub fn convert<R: BufRead>(&self, input: R) -> Result<String, ConvertError> {
        let doc = roxmltree::Document::parse(&self.schema_source)
            .map_err(cp2k_xml_grammar::SchemaError::from)?;
        let tree = GrammarTree::from_document(&doc, self.config.clone())?;
        Ok(transform_to_string(input, tree.root())?)
    }

    /// Converts input held in a string.
    pub fn convert_str(&self, input: &str) -> Result<String, ConvertError> {
        self.convert(input.as_bytes())
    }
}
