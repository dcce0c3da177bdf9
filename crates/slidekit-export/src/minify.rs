//! Line-based minification for generated text.
//!
//! The generators emit one statement or declaration per line and never
//! split a string literal across lines, so dropping indentation and whole
//! comment lines is safe.

fn significant_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
}

/// Newlines are kept so automatic semicolon insertion behaves as before.
pub fn minify_js(source: &str) -> String {
    significant_lines(source).collect::<Vec<_>>().join("\n")
}

pub fn minify_css(source: &str) -> String {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !(line.starts_with("/*") && line.ends_with("*/")))
        .collect::<Vec<_>>()
        .join("")
}

pub fn minify_html(source: &str) -> String {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
