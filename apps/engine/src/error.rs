use thiserror::Error;

use crate::errors::domain::DomainError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Storage error: {detail}")]
    Storage { detail: String },
    #[error("Question pool error: {detail}")]
    Pool { detail: String },
}

impl AppError {
    /// Stable SCREAMING_SNAKE_CASE code for logs and tooling output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::InsufficientPoolSize { .. }) => "INSUFFICIENT_POOL_SIZE",
            AppError::Domain(DomainError::InvalidCardIndex { .. }) => "INVALID_CARD_INDEX",
            AppError::Domain(DomainError::EmptyRound) => "EMPTY_ROUND",
            AppError::Domain(DomainError::OverlappingDropZones { .. }) => {
                "OVERLAPPING_DROP_ZONES"
            }
            AppError::Domain(DomainError::Validation(_)) => "VALIDATION_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Storage { .. } => "STORAGE_ERROR",
            AppError::Pool { .. } => "POOL_ERROR",
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }

    pub fn pool(detail: impl Into<String>) -> Self {
        Self::Pool {
            detail: detail.into(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::storage(e.to_string())
    }
}
