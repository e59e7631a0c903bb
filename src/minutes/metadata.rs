/// Placeholder rendered for metadata fields that were never supplied.
pub const UNSET_FIELD: &str = "none";

/// Meeting metadata supplied by the caller.
///
/// Every field is optional free text and nothing is validated; absent
/// fields render as the literal placeholder "none". Immutable once handed
/// to a renderer.
#[derive(Debug, Clone, Default)]
pub struct MeetingMetadata {
    pub name: Option<String>,
    pub date: Option<String>,
    /// Comma-separated freeform participant list
    pub participants: Option<String>,
    pub chair: Option<String>,
    pub scribe: Option<String>,
}
