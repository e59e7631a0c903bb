use anyhow::{bail, Result};
use std::collections::HashMap;

/// Fixed document template for a rendered set of minutes.
///
/// The output is an HTML fragment, not a full page: the hosting wrapper is
/// responsible for the surrounding document and any transport escaping.
pub const MINUTES_TEMPLATE: &str = r##"<p class="date">{{MEETING_DATE}}</p>
<div class="intro">
    <div class="intro-contact">
        <ul>
            <li>Scribe: {{MEETING_SCRIBE}}</li>
            <li>Chair: {{MEETING_CHAIR}}</li>
            <li>Present: {{MEETING_PARTICIPANTS}}</li>
        </ul>
    </div>
    <div class="intro-what">
        <ul>
            <li><a href="#agenda">Agenda</a>
{{MEETING_AGENDA}}
            </li>
            <li><a href="#ActionSummary">Action Summary</a></li>
        </ul>
    </div>
</div><!-- intro end -->
<hr class="end-intro" />
<div class="meeting">
    <h2 id="agenda">Meeting Notes</h2>
{{MEETING_NOTES}}
</div>
<h2 id="ActionSummary">Summary of Actions and Resolutions</h2>
{{MEETING_ACTIONS}}
"##;

/// Substitute `{{KEY}}` placeholders in a template.
///
/// Every placeholder occurring in the template must have a value; a missing
/// key is an error that propagates to the caller. Unused values are fine.
pub fn substitute(template: &str, values: &HashMap<&str, String>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = match after.find("}}") {
            Some(end) => end,
            None => bail!("unterminated placeholder in minutes template"),
        };
        let key = &after[..end];
        match values.get(key) {
            Some(value) => out.push_str(value),
            None => bail!("no value supplied for template placeholder '{}'", key),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_replaces_all_placeholders() {
        let mut values = HashMap::new();
        values.insert("WHO", "scribe".to_string());
        values.insert("WHAT", "notes".to_string());

        let out = substitute("{{WHO}} takes {{WHAT}}, {{WHO}} files them", &values).unwrap();
        assert_eq!(out, "scribe takes notes, scribe files them");
    }

    #[test]
    fn test_substitute_missing_key_is_an_error() {
        let values = HashMap::new();
        let err = substitute("hello {{NAME}}", &values).unwrap_err();
        assert!(err.to_string().contains("NAME"));
    }

    #[test]
    fn test_substitute_unused_values_are_ignored() {
        let mut values = HashMap::new();
        values.insert("UNUSED", "x".to_string());
        assert_eq!(substitute("no placeholders", &values).unwrap(), "no placeholders");
    }

    #[test]
    fn test_substitute_unterminated_placeholder_is_an_error() {
        let values = HashMap::new();
        assert!(substitute("broken {{KEY", &values).is_err());
    }

    #[test]
    fn test_document_template_placeholders_are_well_formed() {
        let mut values = HashMap::new();
        for key in [
            "MEETING_DATE",
            "MEETING_SCRIBE",
            "MEETING_CHAIR",
            "MEETING_PARTICIPANTS",
            "MEETING_AGENDA",
            "MEETING_NOTES",
            "MEETING_ACTIONS",
        ] {
            values.insert(key, String::new());
        }
        assert!(substitute(MINUTES_TEMPLATE, &values).is_ok());
    }
}
