use std::collections::HashMap;

use anyhow::Result;

use super::anchor::topic_anchor;
use super::classify::{classify_line, LineClass};
use super::metadata::{MeetingMetadata, UNSET_FIELD};
use super::template::{substitute, MINUTES_TEMPLATE};

/// Kind of entry in the action/resolution digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Action,
    Resolution,
}

impl ActionKind {
    /// Upper-case label used both in the digest and in notes paragraphs.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Action => "ACTION",
            ActionKind::Resolution => "RESOLUTION",
        }
    }
}

/// A follow-up task or decision extracted from the notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    pub kind: ActionKind,
    pub text: String,
}

/// One rendered block of the notes body.
///
/// `turn` marks spoken-turn paragraphs (speaker lines and plain lines),
/// which carry the `phone` class. Only a turn paragraph can start a
/// continuation, but it may merge into any preceding paragraph.
#[derive(Debug)]
enum NotesBlock {
    Heading { topic: String },
    Paragraph { turn: bool, body: String },
}

/// Builds the HTML minutes document for one meeting.
///
/// The renderer owns the meeting metadata, the raw notes and the extracted
/// agenda and action-item lists. Extraction is strictly additive: the
/// `extract_*` methods append on every call, so a repeated call duplicates
/// entries. Callers extract at most once per instance.
#[derive(Debug, Default)]
pub struct MinutesRenderer {
    metadata: MeetingMetadata,
    notes: String,
    agenda: Vec<String>,
    action_items: Vec<ActionItem>,
}

impl MinutesRenderer {
    pub fn new(metadata: MeetingMetadata, notes: impl Into<String>) -> Self {
        Self {
            metadata,
            notes: notes.into(),
            agenda: Vec::new(),
            action_items: Vec::new(),
        }
    }

    /// Replace the raw notes. Only meaningful before extraction; entries
    /// already extracted from earlier notes are kept as-is.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Agenda topics extracted so far, in order of appearance.
    pub fn agenda(&self) -> &[String] {
        &self.agenda
    }

    /// Action items and resolutions extracted so far, in order of appearance.
    pub fn action_items(&self) -> &[ActionItem] {
        &self.action_items
    }

    /// Scan the notes and append every agenda topic to the agenda list.
    ///
    /// Order-preserving, no deduplication, and not idempotent: calling this
    /// twice appends the same topics twice.
    pub fn extract_agenda(&mut self) {
        for line in self.notes.lines() {
            if let LineClass::Agenda { topic } = classify_line(line) {
                self.agenda.push(topic.to_string());
            }
        }
    }

    /// Scan the notes and append every ACTION and RESOLUTION entry to the
    /// action-item list.
    ///
    /// A single line matches at most one of the two marker patterns.
    /// Appearance order is preserved; like `extract_agenda`, a repeated
    /// call appends duplicates.
    pub fn extract_action_items(&mut self) {
        for line in self.notes.lines() {
            match classify_line(line) {
                LineClass::Action { text } => self.action_items.push(ActionItem {
                    kind: ActionKind::Action,
                    text: text.to_string(),
                }),
                LineClass::Resolution { text } => self.action_items.push(ActionItem {
                    kind: ActionKind::Resolution,
                    text: text.to_string(),
                }),
                _ => {}
            }
        }
    }

    /// Render the minutes document from the current state.
    ///
    /// Reads the notes and the extracted lists without mutating anything;
    /// the notes are re-classified line by line, independently of any
    /// earlier extraction pass. Fails only if the document template names a
    /// placeholder no value was supplied for.
    pub fn render_html(&self) -> Result<String> {
        let mut values: HashMap<&str, String> = HashMap::new();
        values.insert("MEETING_AGENDA", self.agenda_fragment());
        values.insert("MEETING_ACTIONS", self.actions_fragment());
        values.insert("MEETING_NOTES", self.notes_fragment());
        values.insert("MEETING_DATE", field(&self.metadata.date));
        values.insert("MEETING_SCRIBE", field(&self.metadata.scribe));
        values.insert("MEETING_CHAIR", field(&self.metadata.chair));
        values.insert("MEETING_PARTICIPANTS", field(&self.metadata.participants));

        substitute(MINUTES_TEMPLATE, &values)
    }

    /// Ordered list of agenda topics, each linking to its notes heading.
    /// Empty agenda renders to an empty string, not an empty list.
    fn agenda_fragment(&self) -> String {
        if self.agenda.is_empty() {
            return String::new();
        }
        let items: String = self
            .agenda
            .iter()
            .map(|topic| format!("<li><a href='#{}'>{}</a></li>", topic_anchor(topic), topic))
            .collect();
        format!("<ol>{}</ol>", items)
    }

    /// Digest of actions and resolutions, in appearance order.
    fn actions_fragment(&self) -> String {
        if self.action_items.is_empty() {
            return String::new();
        }
        let items: String = self
            .action_items
            .iter()
            .map(|item| {
                format!(
                    "<li><strong>{}</strong>: {}</li>",
                    item.kind.label(),
                    item.text
                )
            })
            .collect();
        format!("<ul>{}</ul>", items)
    }

    /// The annotated transcript: one block per notes line, except where a
    /// continuation line merges into the paragraph before it.
    fn notes_fragment(&self) -> String {
        let mut blocks: Vec<NotesBlock> = Vec::new();

        for line in self.notes.lines() {
            let block = match classify_line(line) {
                LineClass::Agenda { topic } => NotesBlock::Heading {
                    topic: topic.to_string(),
                },
                LineClass::Action { text } => NotesBlock::Paragraph {
                    turn: false,
                    body: format!("<strong>{}</strong>: {}", ActionKind::Action.label(), text),
                },
                LineClass::Resolution { text } => NotesBlock::Paragraph {
                    turn: false,
                    body: format!(
                        "<strong>{}</strong>: {}",
                        ActionKind::Resolution.label(),
                        text
                    ),
                },
                LineClass::Speaker { name, utterance } => NotesBlock::Paragraph {
                    turn: true,
                    body: format!("<cite>{}</cite>: {}", name, utterance),
                },
                LineClass::Plain { text } => NotesBlock::Paragraph {
                    turn: true,
                    body: text.to_string(),
                },
            };
            push_or_merge(&mut blocks, block);
        }

        let mut html = String::from("<p>");
        for block in &blocks {
            match block {
                NotesBlock::Heading { topic } => {
                    html.push_str(&format!(
                        "<h3 id='{}'>{}</h3>\n",
                        topic_anchor(topic),
                        topic
                    ));
                }
                NotesBlock::Paragraph { turn: true, body } => {
                    html.push_str(&format!("<p class='phone'>{}</p>\n", body));
                }
                NotesBlock::Paragraph { turn: false, body } => {
                    html.push_str(&format!("<p>{}</p>\n", body));
                }
            }
        }
        html.push_str("</p>");
        html
    }
}

/// Metadata field value for rendering, with the "none" placeholder for
/// fields that were never supplied.
fn field(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| UNSET_FIELD.to_string())
}

/// Append a block, folding space-and-ellipsis continuations into the
/// preceding paragraph.
///
/// A turn paragraph whose body starts with one or more spaces followed by
/// a literal `...` continues the paragraph before it (turn or marker, but
/// not a heading): the marker is dropped and the remainder joins the
/// previous body after a line break. Consecutive continuations collapse
/// into the same paragraph.
fn push_or_merge(blocks: &mut Vec<NotesBlock>, block: NotesBlock) {
    if let NotesBlock::Paragraph { turn: true, body } = &block {
        if let Some(rest) = continuation_text(body) {
            if let Some(NotesBlock::Paragraph { body: prev, .. }) = blocks.last_mut() {
                prev.push_str("<br />");
                prev.push_str(rest);
                return;
            }
        }
    }
    blocks.push(block);
}

/// The text after the leading space-and-ellipsis marker, if the body is a
/// continuation.
fn continuation_text(body: &str) -> Option<&str> {
    let unindented = body.trim_start_matches(' ');
    if unindented.len() == body.len() {
        return None;
    }
    unindented.strip_prefix("...")
}
