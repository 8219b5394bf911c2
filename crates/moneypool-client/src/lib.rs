//! Pool API client
//!
//! Fetches pool records with `GET <endpoint>/<pool id>`, authenticated by the
//! `x-api-key` header. The web layer only sees the [`PoolSource`] trait.

pub mod error;

use async_trait::async_trait;
use moneypool_config::ApiConfig;
use moneypool_core::{FetchState, PoolRecord};
use std::sync::Arc;
use std::time::Duration;

pub use error::ClientError;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Source reference type
pub type PoolSourceRef = Arc<dyn PoolSource>;

/// Anything that can look up a pool by id
#[async_trait]
pub trait PoolSource: Send + Sync {
    /// Fetch one pool record
    async fn fetch_pool(&self, pool_id: &str) -> Result<PoolRecord, ClientError>;
}

/// Fetch the pool named by the page, if any.
///
/// Without a pool id nothing is requested and the page stays [`FetchState::Loading`].
pub async fn load_pool(source: &dyn PoolSource, pool_id: Option<&str>) -> FetchState {
    let Some(pool_id) = pool_id else {
        log::debug!("No pool id in request, skipping fetch");
        return FetchState::Loading;
    };

    match source.fetch_pool(pool_id).await {
        Ok(record) => FetchState::Loaded(record),
        Err(e) => {
            match &e {
                ClientError::NotFound { .. } => log::warn!("Pool '{}' not found", pool_id),
                _ => log::error!("Failed to fetch pool '{}': {}", pool_id, e),
            }
            FetchState::Failed(e.into())
        }
    }
}

/// [`PoolSource`] backed by the HTTP pool API
pub struct HttpPoolSource {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpPoolSource {
    /// Create a source from the `api` config section
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Build { message: e.to_string() })?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: config.key.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// URL for one pool
    pub fn pool_url(&self, pool_id: &str) -> String {
        moneypool_utils::join_url(&self.endpoint, pool_id)
    }
}

#[async_trait]
impl PoolSource for HttpPoolSource {
    async fn fetch_pool(&self, pool_id: &str) -> Result<PoolRecord, ClientError> {
        let url = self.pool_url(pool_id);

        log::info!("Fetching pool '{}' from: {}", pool_id, url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| ClientError::Network { message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                404 => ClientError::NotFound { pool_id: pool_id.to_string() },
                400 | 401 | 403 => ClientError::Rejected { status: status.as_u16() },
                code => ClientError::Status { status: code },
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network { message: e.to_string() })?;

        let record: PoolRecord = serde_json::from_str(&body)
            .map_err(|e| ClientError::Decode { message: e.to_string() })?;

        log::info!(
            "Fetched pool '{}' with {} transactions",
            record.name,
            record.transactions.len()
        );

        Ok(record)
    }
}

// ==================== Tests ====================
