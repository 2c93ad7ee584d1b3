use cp2k_xml_grammar::SchemaError;
use cp2k_xml_transform::TransformError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("no schema registered under id '{0}'")]
    SchemaNotFound(String),

    #[error("invalid schema id '{0}'")]
    InvalidSchemaId(String),

    #[error("unable to read schema file {path}: {source}")]
    SchemaRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}
