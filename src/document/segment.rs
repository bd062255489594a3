// Turns a plain-text extract with `==Heading==` markers into a TOC and
// formatted section bodies.
use crate::document::style::{Style, stylize};

pub const INTRODUCTION: &str = "Introduction";
const EMPTY_SUBSECTION: &str = "-subsection contains no text-";
/// Sections from the first header containing one of these on are dropped.
const TRAILING_SECTIONS: [&str; 2] = ["See also", "References"];

/// Split `text` on `delim` wherever it is not touching another `=`, so that
/// `==` never matches inside `===` or `====`.
pub fn split_on_marker<'a>(
    text: &'a str,
    delim: &str,
) -> Vec<&'a str> {
    let bytes = text.as_bytes();
    let width = delim.len();
    let mut parts = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;
    while i + width <= bytes.len() {
        let isolated = bytes[i..].starts_with(delim.as_bytes())
            && (i == 0 || bytes[i - 1] != b'=')
            && bytes.get(i + width) != Some(&b'=');
        if isolated {
            parts.push(&text[start..i]);
            i += width;
            start = i;
        } else {
            i += 1;
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Returns true for header titles that mark the end of readable content.
pub fn is_trailing_header(title: &str) -> bool {
    TRAILING_SECTIONS.iter().any(|t| title.contains(t))
}

/// Build `(toc, sections)` from a raw extract. Always yields at least the
/// implicit introduction.
pub fn segment(extract: &str) -> (Vec<String>, Vec<String>) {
    let mut parts = vec![INTRODUCTION];
    parts.extend(split_on_marker(extract, "=="));

    let mut toc = Vec::new();
    let mut sections = Vec::new();
    for pair in parts.chunks(2) {
        let title = pair[0].trim();
        if is_trailing_header(title) {
            break;
        }
        // A dangling header at the very end has no body
        let body = pair.get(1).copied().unwrap_or_default().trim();
        let body = format_headers(body, "===", Style::BoldSans);
        let body = format_headers(&body, "====", Style::BoldItalicSans);

        sections.push(format!(
            "{}\n\n{}",
            stylize(&title.to_uppercase(), Style::BoldSerif),
            body
        ));
        toc.push(title.to_string());
    }
    (toc, sections)
}

/// Replace `delim`-wrapped subsection titles with styled lines.
pub fn format_headers(
    text: &str,
    delim: &str,
    style: Style,
) -> String {
    let parts: Vec<String> = split_on_marker(text, delim)
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            let part = part.trim();
            if i % 2 == 1 {
                format!("\n{}", stylize(part, style))
            } else if i > 0 && part.is_empty() {
                stylize(EMPTY_SUBSECTION, Style::ItalicSans)
            } else {
                part.to_string()
            }
        })
        .collect();
    parts.join("\n")
}
