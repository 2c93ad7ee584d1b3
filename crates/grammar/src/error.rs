use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("XML parsing error: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("unable to get schema root element '{0}'")]
    RootElementMissing(String),
}
