//! Error types for moneypool-client

use moneypool_core::FetchFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Pool not found: {pool_id}")]
    NotFound { pool_id: String },

    #[error("Request rejected with status {status}")]
    Rejected { status: u16 },

    #[error("Unexpected status {status}")]
    Status { status: u16 },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Invalid response body: {message}")]
    Decode { message: String },

    #[error("Failed to create HTTP client: {message}")]
    Build { message: String },
}

impl From<ClientError> for FetchFailure {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::NotFound { pool_id } => FetchFailure::NotFound { pool_id },
            ClientError::Rejected { status } => FetchFailure::Rejected { status },
            ClientError::Status { status } => FetchFailure::Upstream { status },
            ClientError::Network { message } | ClientError::Build { message } => {
                FetchFailure::Network { message }
            }
            ClientError::Decode { message } => FetchFailure::Decode { message },
        }
    }
}
