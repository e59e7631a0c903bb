//! Meeting-notes parsing and HTML rendering
//!
//! This module turns a scribe's loosely structured plain-text notes into a
//! formatted HTML minutes document:
//! - Line classification (Topic/ACTION/RESOLUTION markers, spoken turns)
//! - Agenda and action-item extraction
//! - Anchor identifiers linking the agenda list to notes headings
//! - Template-driven assembly of the output fragment

mod anchor;
mod classify;
mod metadata;
mod renderer;
mod template;

pub use anchor::topic_anchor;
pub use classify::{classify_line, LineClass};
pub use metadata::{MeetingMetadata, UNSET_FIELD};
pub use renderer::{ActionItem, ActionKind, MinutesRenderer};
pub use template::{substitute, MINUTES_TEMPLATE};
