/// Shared application state for HTTP handlers
///
/// The rendering core is stateless and every request builds its own
/// renderer instance, so the only shared data is the immutable
/// diagnostics flag.
#[derive(Clone)]
pub struct AppState {
    /// Include error chains in 500 responses (test environments only)
    pub show_error_detail: bool,
}

impl AppState {
    pub fn new(show_error_detail: bool) -> Self {
        Self { show_error_detail }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}
