use super::pages;
use super::state::AppState;
use crate::minutes::{MeetingMetadata, MinutesRenderer};
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Raw fields from the intake form or the JSON API. Everything is optional
/// free text; absent metadata renders as its placeholder.
#[derive(Debug, Default, Deserialize)]
pub struct MinutesRequest {
    pub meeting_name: Option<String>,
    pub meeting_date: Option<String>,
    pub participants: Option<String>,
    pub chair: Option<String>,
    pub scribe: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    /// The rendered minutes fragment (not a full page)
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Intake form for a new set of meeting notes
pub async fn intake_form() -> impl IntoResponse {
    Html(pages::intake_page())
}

/// POST /minutes
/// Render submitted notes into a complete minutes page
pub async fn render_minutes_page(
    State(state): State<AppState>,
    Form(req): Form<MinutesRequest>,
) -> impl IntoResponse {
    let title = req.meeting_name.as_deref().map(pages::escape_html);
    match render_fragment(req) {
        Ok(fragment) => Html(pages::result_page(title.as_deref(), &fragment)).into_response(),
        Err(e) => {
            error!("Failed to render minutes: {:#}", e);
            let body = if state.show_error_detail {
                format!("minutes rendering failed: {:#}", e)
            } else {
                "minutes rendering failed".to_string()
            };
            (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
        }
    }
}

/// POST /api/minutes
/// Render submitted notes and return the bare HTML fragment
pub async fn render_minutes_fragment(
    State(state): State<AppState>,
    Json(req): Json<MinutesRequest>,
) -> impl IntoResponse {
    match render_fragment(req) {
        Ok(html) => (StatusCode::OK, Json(RenderResponse { html })).into_response(),
        Err(e) => {
            error!("Failed to render minutes: {:#}", e);
            let error = if state.show_error_detail {
                format!("{:#}", e)
            } else {
                "minutes rendering failed".to_string()
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { error }),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Escape the raw fields and run the full rendering pipeline.
///
/// Fields are HTML-escaped before the core sees them, so the notes are
/// classified in their escaped form and the core can splice them into the
/// document verbatim.
fn render_fragment(req: MinutesRequest) -> anyhow::Result<String> {
    let metadata = MeetingMetadata {
        name: req.meeting_name.as_deref().map(pages::escape_html),
        date: req.meeting_date.as_deref().map(pages::escape_html),
        participants: req.participants.as_deref().map(pages::escape_html),
        chair: req.chair.as_deref().map(pages::escape_html),
        scribe: req.scribe.as_deref().map(pages::escape_html),
    };
    let notes = req
        .notes
        .as_deref()
        .map(pages::escape_html)
        .unwrap_or_default();

    let mut renderer = MinutesRenderer::new(metadata, notes);
    renderer.extract_agenda();
    renderer.extract_action_items();

    info!(
        "Rendering minutes: {} agenda topics, {} action items",
        renderer.agenda().len(),
        renderer.action_items().len()
    );

    renderer.render_html()
}
