use thiserror::Error;

#[derive(Error, Debug)]
pub enum OmenError {
    #[error("Required field '{field}' is empty")]
    EmptyField { field: &'static str },

    #[error("Monthly income must be greater than zero")]
    ZeroIncome,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type OmenResult<T> = Result<T, OmenError>;
