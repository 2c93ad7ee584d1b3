use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("unable to process input: {0}")]
    Input(std::io::Error),

    #[error("error creating XML document: {0}")]
    Output(std::io::Error),

    #[error("document builder misuse: {0}")]
    Builder(String),

    #[error("produced document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
