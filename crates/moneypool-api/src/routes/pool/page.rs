//! Pool page - Full page or HTMX partial
//!
//! `GET /?mp=<pool>[&mode=light|dark]` fetches the pool once and renders it.
//! Without `mp` nothing is fetched and the loading placeholders stay up.

use axum::extract::State;
use axum::http::{HeaderMap, Uri};
use axum::response::Html;
use moneypool_config::ColorMode;
use moneypool_core::{parse_pool_id, query_param, ViewState};

use super::render::{render_pool_content, RenderContext};
use crate::AppState;

/// Query parameter that overrides the configured colour mode
pub const MODE_PARAM: &str = "mode";

pub async fn page_pool(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Html<String> {
    let config = &state.config;
    let url = uri.to_string();
    let pool_id = parse_pool_id(&url);
    let mode = query_param(&url, MODE_PARAM)
        .and_then(|m| m.parse::<ColorMode>().ok())
        .unwrap_or(config.ui.color_mode);

    let view = moneypool_client::load_pool(state.source.as_ref(), pool_id.as_deref())
        .await
        .into_view();

    let title = match &view {
        ViewState::Ready(pool) => format!("{} - {}", pool.title, config.ui.title),
        _ => config.ui.title.clone(),
    };

    let ctx = RenderContext::new(config, mode, pool_id.as_deref());
    let inner_content = render_pool_content(&view, &ctx);

    Html(crate::page_response(&headers, &title, mode, &inner_content))
}
