//! Pool page rendering
//!
//! Pure functions from a [`ViewState`] to HTML. Everything the markup depends
//! on arrives through [`RenderContext`]; nothing is read from global state.

use moneypool_config::{ColorMode, Config, CurrencyConfig, PaymentConfig};
use moneypool_core::{FetchFailure, Notice, PoolView, ViewState, POOL_PARAM};
use moneypool_utils::escape_html;

/// Inputs to rendering besides the view itself
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub currency: &'a CurrencyConfig,
    pub payment: &'a PaymentConfig,
    pub project_link: &'a str,
    pub mode: ColorMode,
    /// Pool named by the request, kept in the colour toggle link
    pub pool_id: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, mode: ColorMode, pool_id: Option<&'a str>) -> Self {
        Self {
            currency: &config.currency,
            payment: &config.payment,
            project_link: &config.ui.project_link,
            mode,
            pool_id,
        }
    }
}

/// Page body for any view state
pub fn render_pool_content(state: &ViewState, ctx: &RenderContext) -> String {
    let body = match state {
        ViewState::Loading => format!("{}{}", render_info_loading(), render_table_skeleton()),
        ViewState::Ready(view) => format!("{}{}", render_info_section(view, ctx), render_funds_table(view)),
        ViewState::Failed(failure) => render_failure(failure),
    };
    format!("{}{}", render_controls(ctx), body)
}

/// Colour mode toggle and project link
///
/// The toggle swaps `#main` through HTMX and falls back to a plain link.
pub fn render_controls(ctx: &RenderContext) -> String {
    let next = ctx.mode.toggled();
    let href = match ctx.pool_id {
        Some(id) => format!("?{}={}&mode={}", POOL_PARAM, urlencoding::encode(id), next),
        None => format!("?mode={}", next),
    };
    let label = match next {
        ColorMode::Dark => "🌙 Dark Mode",
        ColorMode::Light => "☀️ Light Mode",
    };

    format!(
        r#"<div id='controls-box' class='flex justify-end gap-2 mb-4 text-sm'>
            <a id='color-mode-toggle' href='{0}' hx-get='{0}' hx-target='#main' hx-swap='outerHTML' hx-push-url='true' class='px-3 py-1 rounded border'>{1}</a>
            <a id='project-link' href='{2}' target='_blank' rel='noopener noreferrer' class='px-3 py-1 rounded border'>Source</a>
        </div>"#,
        escape_html(&href),
        label,
        escape_html(ctx.project_link)
    )
}

/// Total, title, tags and the contribution notice
pub fn render_info_section(view: &PoolView, ctx: &RenderContext) -> String {
    let status_color = if view.is_open() { "bg-green-600" } else { "bg-red-600" };
    let mut tags = format!(
        "<span class='tag px-2 py-1 rounded text-xs text-white {}'>{}</span>",
        status_color, view.status
    );
    for tag in &view.tags {
        tags.push_str(&format!(
            "<span class='tag px-2 py-1 rounded text-xs text-white bg-green-600'>{}</span>",
            escape_html(tag)
        ));
    }

    format!(
        r#"<section id='info-section' class='text-center'>
            <div id='logo' class='text-5xl mb-2'>💰</div>
            <p id='sum-text' class='text-3xl font-bold'>{}</p>
            <p id='contrib-text' class='text-xs text-gray-500'>contributed for</p>
            <p id='title-text' class='text-3xl'>{}</p>
            <div id='tags-stack' class='flex justify-center gap-2 my-3'>{}</div>
            <hr id='hr-top' class='my-4'>
            {}
            <hr id='hr-bottom' class='my-4'>
        </section>"#,
        escape_html(&ctx.currency.decorate(&view.total_display)),
        escape_html(&view.title),
        tags,
        render_notice(&view.notice, ctx.payment)
    )
}

/// Invitation for open pools, thanks for closed ones
pub fn render_notice(notice: &Notice, payment: &PaymentConfig) -> String {
    match notice {
        Notice::ThankYou => "<p id='notice'>Thank you for your contributions!</p>".to_string(),
        Notice::Invite { keyword } => {
            let provider = if payment.link.is_empty() {
                escape_html(&payment.provider)
            } else {
                format!(
                    "<a id='payment-link' href='{}' target='_blank' rel='noopener noreferrer' class='text-green-600 underline'>{}</a>",
                    escape_html(&payment.link),
                    escape_html(&payment.provider)
                )
            };
            format!(
                "<p id='notice'>Want to contribute?</p><p>Send funds via {} and start your message with '{}'.</p>",
                provider,
                escape_html(keyword)
            )
        }
    }
}

/// Date, contributor, amount; newest first
pub fn render_funds_table(view: &PoolView) -> String {
    let rows: Vec<String> = view
        .rows
        .iter()
        .map(|row| {
            format!(
                "<tr class='border-b'><td class='py-2'>{}</td><td class='py-2'>{}</td><td class='py-2 text-right'>{}</td></tr>",
                escape_html(&row.date),
                escape_html(&row.contributor),
                escape_html(&row.amount)
            )
        })
        .collect();

    format!(
        "<table id='transactions-table' class='w-full'><tbody>{}</tbody></table>",
        rows.join("")
    )
}

/// Placeholders for total and title while no pool is loaded
pub fn render_info_loading() -> String {
    r#"<section id='info-section' class='text-center'>
            <div id='logo' class='text-5xl mb-2'>💰</div>
            <div id='sum-text-skel' class='skeleton mx-auto bg-gray-300 rounded' style='width:100px;height:40px'></div>
            <p id='contrib-text' class='text-xs text-gray-500'>contributed for</p>
            <div id='title-text-skel' class='skeleton mx-auto bg-gray-300 rounded' style='width:300px;height:30px'></div>
            <hr id='hr-top' class='my-4'>
            <hr id='hr-bottom' class='my-4'>
        </section>"#
        .to_string()
}

/// Three placeholder bars in place of the table
pub fn render_table_skeleton() -> String {
    let bar = "<div class='skeleton bg-gray-300 rounded mb-2' style='height:40px'></div>";
    format!("<div id='table-skel' class='mx-auto' style='width:80%'>{}</div>", bar.repeat(3))
}

/// Panel shown instead of the pool when it could not be loaded
pub fn render_failure(failure: &FetchFailure) -> String {
    format!(
        r#"<section id='fetch-failed' class='bg-red-50 border border-red-200 text-red-700 rounded-lg p-4 text-center'>
            <p class='font-semibold'>Could not load this moneypool</p>
            <p>{}</p>
            <p class='text-xs mt-2'>{}</p>
        </section>"#,
        escape_html(&failure.message()),
        failure.code()
    )
}

// ==================== Tests ====================
