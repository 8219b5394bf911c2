//! Pool JSON API

use axum::extract::{Path, State};
use axum::Json;
use moneypool_client::load_pool;
use moneypool_core::{PoolView, ViewState};

use crate::{ApiError, AppState};

/// `GET /api/pools/:id` - the built view model
pub async fn api_pool(
    State(state): State<AppState>,
    Path(pool_id): Path<String>,
) -> Result<Json<PoolView>, ApiError> {
    match load_pool(state.source.as_ref(), Some(&pool_id)).await.into_view() {
        ViewState::Ready(view) => Ok(Json(view)),
        ViewState::Failed(failure) => Err(failure.into()),
        // only reached without a pool id
        ViewState::Loading => Err(ApiError::NotFound { resource: pool_id }),
    }
}
