//! Pool routes - Summary page and transaction table

pub mod api;
pub mod page;
pub mod render;

pub use api::api_pool;
pub use page::page_pool;
