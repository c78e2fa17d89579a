use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Corruption(String),
    Persistence(String),
    NotFound(String),
    Validation(String),
    FailedRequest(reqwest::Error),
    Lock(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FailedRequest(err)
    }
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        AppError::Lock(err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Corruption(msg) => {
                write!(f, "Stored data failed to decode: {}", msg)
            }
            AppError::Persistence(msg) => {
                write!(f, "Could not persist data: {}", msg)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::FailedRequest(e) => {
                write!(f, "Request failed: {}", e)
            }
            AppError::Lock(msg) => {
                write!(f, "Write guard poisoned: {}", msg)
            }
        }
    }
}
