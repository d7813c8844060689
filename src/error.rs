#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Error fetching the webpage: {0}")]
    Fetch(String),

    #[error("Error extracting job data: {0}")]
    Parse(String),

    #[error("Error saving scraped data: {0}")]
    Persist(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest keeps the underlying cause (DNS, TLS, refused...) out of Display
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        AppError::Fetch(message)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persist(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Persist(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
