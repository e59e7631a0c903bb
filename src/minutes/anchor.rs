use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and `_ . - /` gets percent-encoded.
const ANCHOR_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'/');

/// Anchor identifier for an agenda topic.
///
/// Non-ASCII characters are stripped outright rather than encoded, keeping
/// the legacy anchor convention; the remainder is percent-encoded for safe
/// use in a URL fragment. The agenda link list and the matching notes
/// heading both use this, so the in-page links line up.
pub fn topic_anchor(topic: &str) -> String {
    let ascii: String = topic.chars().filter(char::is_ascii).collect();
    utf8_percent_encode(&ascii, ANCHOR_ENCODE_SET).to_string()
}
