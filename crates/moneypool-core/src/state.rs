//! Outcome of the single pool fetch a page makes

use serde::{Deserialize, Serialize};

use crate::error::{DefaultErrorLogger, ErrorCode, ErrorContext, ErrorDetails, ErrorLogger};
use crate::models::PoolRecord;
use crate::view::PoolView;

/// Why a pool could not be shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum FetchFailure {
    /// The API has no pool with this id
    NotFound { pool_id: String },
    /// The API refused the request (bad id or bad key)
    Rejected { status: u16 },
    /// Any other non-success status
    Upstream { status: u16 },
    /// The API could not be reached
    Network { message: String },
    /// The response body was not a pool record
    Decode { message: String },
    /// The record arrived but failed validation
    Invalid { message: String },
}

impl FetchFailure {
    /// Error code for logs and JSON responses
    pub fn code(&self) -> ErrorCode {
        match self {
            FetchFailure::NotFound { .. } => ErrorCode::PoolNotFound,
            FetchFailure::Rejected { .. } => ErrorCode::UpstreamRejected,
            FetchFailure::Upstream { .. } => ErrorCode::UpstreamError,
            FetchFailure::Network { .. } => ErrorCode::NetworkError,
            FetchFailure::Decode { .. } => ErrorCode::DecodeError,
            FetchFailure::Invalid { .. } => ErrorCode::ValidationError,
        }
    }

    /// Text shown on the page
    pub fn message(&self) -> String {
        match self {
            FetchFailure::NotFound { pool_id } => format!("There is no moneypool called '{}'.", pool_id),
            FetchFailure::Rejected { status } => format!("The moneypool service refused the request ({}).", status),
            FetchFailure::Upstream { status } => format!("The moneypool service is not available right now ({}).", status),
            FetchFailure::Network { .. } => "The moneypool service could not be reached.".to_string(),
            FetchFailure::Decode { .. } => "The moneypool service sent an unreadable answer.".to_string(),
            FetchFailure::Invalid { message } => format!("This moneypool contains invalid data: {}", message),
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let details = ErrorDetails::new(self.code(), self.message());
        match self {
            FetchFailure::NotFound { .. } => details.with_suggestion("Check the 'mp' parameter in the link.".to_string()),
            FetchFailure::Network { message } | FetchFailure::Decode { message } => {
                details.with_detail(serde_json::json!({ "cause": message }))
            }
            _ => details,
        }
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

/// Result of fetching a pool for one page view
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// No record yet, also the final state when the URL names no pool
    Loading,
    Loaded(PoolRecord),
    Failed(FetchFailure),
}

/// What a page renders
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Ready(PoolView),
    Failed(FetchFailure),
}

impl FetchState {
    /// Build the view for a loaded record; a record that fails validation becomes a failure
    pub fn into_view(self) -> ViewState {
        match self {
            FetchState::Loading => ViewState::Loading,
            FetchState::Failed(failure) => ViewState::Failed(failure),
            FetchState::Loaded(record) => match PoolView::build(&record) {
                Ok(view) => ViewState::Ready(view),
                Err(e) => {
                    let context = ErrorContext::new("build_view").with_pool_id(&record.name);
                    DefaultErrorLogger.log_error(&e, &context);
                    ViewState::Failed(FetchFailure::Invalid { message: e.to_string() })
                }
            },
        }
    }
}
