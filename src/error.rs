use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid price: {0}")]
    InvalidPrice(String),
    #[error("Invalid coin: {0}")]
    InvalidCoin(String),
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VendError>;
