//! `index.html` generation.

use slidekit_core::{PresentationConfig, Result};

/// Element id of the inline presentation JSON.
pub const DATA_ELEMENT_ID: &str = "presentation-data";

/// Escape text for an HTML text node or attribute value.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Serialize the presentation for a `<script type="application/json">` body.
///
/// `<` only occurs inside JSON strings, where `\u003c` decodes to the same
/// character, so a `</script>` in slide text cannot end the element.
pub fn embed_json(config: &PresentationConfig) -> Result<String> {
    let json = serde_json::to_string(config)?;
    Ok(json.replace('<', "\\u003c"))
}

/// Build the document shell with the embedded presentation data.
pub fn generate_html(config: &PresentationConfig, title: &str) -> Result<String> {
    let data = embed_json(config)?;
    let title = escape_html(title);
    let total = config.slide_count();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="styles.css">
</head>
<body>
    <div id="app" class="presentation">
        <nav id="navigation" class="nav glass" aria-label="Slide navigation">
            <button id="prev-slide" type="button" aria-label="Previous slide">&#9664;</button>
            <button id="play-pause" type="button" aria-label="Play">&#9654;</button>
            <button id="next-slide" type="button" aria-label="Next slide">&#9654;&#9654;</button>
            <span id="slide-counter" class="counter">1 / {total}</span>
        </nav>
        <main id="slide-content" class="slide layout-default" aria-live="polite"></main>
        <div id="progress" class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100">
            <div id="progress-bar" class="progress-bar"></div>
        </div>
    </div>
    <script type="application/json" id="{DATA_ELEMENT_ID}">{data}</script>
    <script src="app.js"></script>
</body>
</html>
"#
    ))
}
