#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Wrong Account Number or Password")]
    WrongCredentials,

    #[error("You don't have access to this account")]
    AccessDenied,

    #[error("Amount must be a positive number")]
    InvalidAmount,

    #[error("Insufficient funds!")]
    InsufficientFunds,

    #[error("{0}")]
    Validation(String),

    #[error("Please create an account first!")]
    NoAccount,

    #[error("Storage unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize account state: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Stored account data is corrupt: {0}")]
    CorruptState(String),
}
