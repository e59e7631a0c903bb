use once_cell::sync::Lazy;
use regex::Regex;

/// One line of raw notes, classified.
///
/// Categories are mutually exclusive: matchers run in declaration order and
/// the first hit wins, so an `ACTION:` line is never read as a spoken turn.
/// `Plain` is the catch-all, which makes classification total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Topic/Sujet/Agenda marker introducing an agenda item
    Agenda { topic: &'a str },
    /// ACTION marker recording a follow-up task
    Action { text: &'a str },
    /// RESOLUTION marker recording a decision
    Resolution { text: &'a str },
    /// A "Name: utterance" spoken turn
    Speaker { name: &'a str, utterance: &'a str },
    /// Anything else, passed through verbatim
    Plain { text: &'a str },
}

static AGENDA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:Topic|Sujet|Agenda): (.*)$").unwrap());
static ACTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ACTION: (.*)$").unwrap());
static RESOLUTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^RESOLUTION: (.*)$").unwrap());
static SPEAKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+): (.+)$").unwrap());

/// Classify a single notes line.
///
/// Matching is anchored at the line start (no leading-whitespace tolerance)
/// and the keyword tokens are case-sensitive fixed literals. The speaker
/// pattern is deliberately permissive: any otherwise-unclassified line
/// containing ": " reads as a spoken turn, with no length bound on the name.
pub fn classify_line(line: &str) -> LineClass<'_> {
    if let Some(topic) = AGENDA_RE.captures(line).and_then(|c| c.get(1)) {
        return LineClass::Agenda {
            topic: topic.as_str(),
        };
    }
    if let Some(text) = ACTION_RE.captures(line).and_then(|c| c.get(1)) {
        return LineClass::Action {
            text: text.as_str(),
        };
    }
    if let Some(text) = RESOLUTION_RE.captures(line).and_then(|c| c.get(1)) {
        return LineClass::Resolution {
            text: text.as_str(),
        };
    }
    if let Some(caps) = SPEAKER_RE.captures(line) {
        if let (Some(name), Some(utterance)) = (caps.get(1), caps.get(2)) {
            return LineClass::Speaker {
                name: name.as_str(),
                utterance: utterance.as_str(),
            };
        }
    }
    LineClass::Plain { text: line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agenda_keywords() {
        assert_eq!(
            classify_line("Topic: Budget review"),
            LineClass::Agenda {
                topic: "Budget review"
            }
        );
        assert_eq!(
            classify_line("Sujet: La fin du monde"),
            LineClass::Agenda {
                topic: "La fin du monde"
            }
        );
        assert_eq!(
            classify_line("Agenda: next steps"),
            LineClass::Agenda {
                topic: "next steps"
            }
        );
    }

    #[test]
    fn test_action_and_resolution_markers() {
        assert_eq!(
            classify_line("ACTION: file the report"),
            LineClass::Action {
                text: "file the report"
            }
        );
        assert_eq!(
            classify_line("RESOLUTION: adopt the new format"),
            LineClass::Resolution {
                text: "adopt the new format"
            }
        );
    }

    #[test]
    fn test_markers_win_over_speaker_pattern() {
        // These all also match the "Name: utterance" shape; the marker
        // patterns must take precedence.
        assert!(matches!(
            classify_line("Topic: Deadline"),
            LineClass::Agenda { .. }
        ));
        assert!(matches!(
            classify_line("ACTION: ship it"),
            LineClass::Action { .. }
        ));
        assert!(matches!(
            classify_line("RESOLUTION: agreed"),
            LineClass::Resolution { .. }
        ));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        // Lowercase keywords fall through to the speaker pattern.
        assert_eq!(
            classify_line("action: ship it"),
            LineClass::Speaker {
                name: "action",
                utterance: "ship it"
            }
        );
        assert_eq!(
            classify_line("topic: deadline"),
            LineClass::Speaker {
                name: "topic",
                utterance: "deadline"
            }
        );
    }

    #[test]
    fn test_no_leading_whitespace_tolerance() {
        // An indented marker is not a marker; it still has ": " so it
        // reads as a spoken turn with a whitespace-prefixed name.
        assert_eq!(
            classify_line(" Topic: Deadline"),
            LineClass::Speaker {
                name: " Topic",
                utterance: "Deadline"
            }
        );
    }

    #[test]
    fn test_speaker_line() {
        assert_eq!(
            classify_line("Alice: we should ship on Friday"),
            LineClass::Speaker {
                name: "Alice",
                utterance: "we should ship on Friday"
            }
        );
    }

    #[test]
    fn test_speaker_name_is_greedy_on_multiple_colons() {
        assert_eq!(
            classify_line("Alice: note: check the logs"),
            LineClass::Speaker {
                name: "Alice: note",
                utterance: "check the logs"
            }
        );
    }

    #[test]
    fn test_plain_lines() {
        assert_eq!(classify_line(""), LineClass::Plain { text: "" });
        assert_eq!(
            classify_line("general discussion followed"),
            LineClass::Plain {
                text: "general discussion followed"
            }
        );
        // A colon without a following space is not a speaker line.
        assert_eq!(
            classify_line("12:30 lunch"),
            LineClass::Plain { text: "12:30 lunch" }
        );
        assert_eq!(
            classify_line("   ...that continues here"),
            LineClass::Plain {
                text: "   ...that continues here"
            }
        );
    }
}
