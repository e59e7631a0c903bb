pub mod config;
pub mod http;
pub mod minutes;

pub use config::Config;
pub use http::{create_router, AppState};
pub use minutes::{
    classify_line, topic_anchor, ActionItem, ActionKind, LineClass, MeetingMetadata,
    MinutesRenderer,
};
