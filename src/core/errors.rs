use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoneymoonError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("destination catalog is empty")]
    EmptyCatalog,

    #[error("HoneymoonError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for HoneymoonError {
    fn from(error: std::io::Error) -> Self {
        HoneymoonError::Io(Box::new(error))
    }
}
