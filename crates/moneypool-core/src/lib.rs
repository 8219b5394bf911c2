//! Core pool logic: records, view model building and fetch state
//!
//! Nothing here performs I/O. A page fetches a [`PoolRecord`], wraps the
//! outcome in a [`FetchState`], and renders the [`ViewState`] built from it.

pub mod date;
pub mod error;
pub mod models;
pub mod query;
pub mod state;
pub mod view;

pub use date::PoolDate;
pub use error::{CoreError, CoreResult, ErrorCode, ErrorDetails, ErrorSeverity};
pub use models::{PoolRecord, Transaction};
pub use query::{parse_pool_id, query_param, POOL_PARAM};
pub use state::{FetchFailure, FetchState, ViewState};
pub use view::{
    all_same_year, display_amount, display_date, format_total, total, Notice, PoolStatus,
    PoolView, TransactionRow,
};
