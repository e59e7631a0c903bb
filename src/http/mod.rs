//! HTTP intake for the minutes generator
//!
//! This module provides the thin web wrapper around the rendering core:
//! - GET  /            - Intake form
//! - POST /minutes     - Render submitted notes into a full HTML page
//! - POST /api/minutes - Render submitted notes, return the bare fragment
//! - GET  /health      - Health check

mod handlers;
mod pages;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
