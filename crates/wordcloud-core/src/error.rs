/// Errors that can occur in Wordcloud operations.
#[derive(Debug, thiserror::Error)]
pub enum WordcloudError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for WordcloudError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WordcloudError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
