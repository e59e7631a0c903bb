//! Page chrome for the intake form and the generated result page.
//!
//! Everything presentational lives here: HTML escaping of raw form fields,
//! the embedded stylesheet and the full-page scaffolding around the
//! rendered fragment. The rendering core only ever sees and produces
//! fragments.

use chrono::Local;

/// Escape text for embedding in HTML body or attribute positions.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared stylesheet, embedded in both pages.
const PAGE_STYLE: &str = r#"
            html { font-size: 18px; line-height: 170%; }
            body { background: #fff; color: #333; font-family: 'Gill Sans', Arial, Helvetica; }
            h1 { font-weight: 100; margin: 1em 0; text-align: center; }
            h2 { font-size: 1.2em; margin-top: 1em; border-top: 1px solid #ddd; padding-top: 1.5em; text-align: center; }
            h3 { font-size: 1.3em; margin-top: 1em; font-weight: 100; padding-top: .5em; }
            p { margin: 1em; }
            ol li { list-style-type: decimal; }
            a, a:link, a:visited { color: #900; }
            a:active, a:hover { color: #f33; text-decoration: underline; }
            .phone { clear: left; margin: 0.2em 1em 0 1em; padding: 5px; }
            .phone cite { padding: 3px; margin: 0 3px 0 0; font-weight: bold; }
            .meeting { padding: 0.5em; }
            .meeting h3 { margin: 2em 0 1em 0.2em; }
            #generatedcontent { border: 1px solid #ccc; margin: 0 10% 1em 10%; padding: 1em; }
            .notesfield { width: 100%; min-height: 12em; }
            label { display: block; margin-top: 1em; font-weight: bold; }
"#;

/// The intake form, with the date input prefilled with today's date.
pub fn intake_page() -> String {
    let today = Local::now().format("%Y-%m-%d");
    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>Meeting minutes generator</title>
        <meta charset="utf-8"/>
        <style type="text/css" media="all">{style}</style>
    </head>
    <body>
        <h1>Meeting minutes generator</h1>
        <form action="/minutes" method="post" accept-charset="utf-8">
            <label for="meeting_name">Meeting name</label>
            <input type="text" name="meeting_name" id="meeting_name" />
            <label for="meeting_date">Date</label>
            <input type="text" name="meeting_date" id="meeting_date" value="{today}" />
            <label for="participants">Participants</label>
            <input type="text" name="participants" id="participants" />
            <label for="chair">Chair</label>
            <input type="text" name="chair" id="chair" />
            <label for="scribe">Scribe</label>
            <input type="text" name="scribe" id="scribe" />
            <label for="notes">Notes</label>
            <textarea name="notes" id="notes" class="notesfield"></textarea>
            <p><input type="submit" value="Generate minutes" /></p>
        </form>
    </body>
</html>
"#,
        style = PAGE_STYLE,
        today = today,
    )
}

/// The result page: the generated fragment embedded for review, plus the
/// raw markup in a readonly textarea for copy-paste into the final home of
/// the minutes. `meeting_name` must already be HTML-escaped.
pub fn result_page(meeting_name: Option<&str>, fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
    <head>
        <title>{title}</title>
        <meta charset="utf-8"/>
        <style type="text/css" media="all">{style}</style>
    </head>
    <body>
        <h1>Your minutes are ready</h1>
        <p>Review the generated minutes below, or go back to correct the notes.</p>
        <hr />
        <h2>Generated minutes</h2>
        <div id="generatedcontent">{fragment}</div>
        <h2>Raw markup</h2>
        <p><textarea class="notesfield" readonly>{escaped}</textarea></p>
    </body>
</html>
"#,
        title = meeting_name.unwrap_or("Your minutes are ready"),
        style = PAGE_STYLE,
        fragment = fragment,
        escaped = escape_html(fragment),
    )
}
