// src/utils/html_debug.rs
use std::fs;
use std::path::Path;
use crate::extractors::names::{NAME_ROW_RE, YEAR_MARKER_RE};
use crate::utils::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    Year,
    Row,
}

impl Highlight {
    fn css_class(self) -> &'static str {
        match self {
            Highlight::Year => "highlight-year",
            Highlight::Row => "highlight-row",
        }
    }
}

/// Wraps every year marker and name row match of `html` in a highlighted span.
pub fn annotate(html: &str) -> String {
    let mut highlights: Vec<(usize, usize, Highlight)> = Vec::new();
    if let Some(m) = YEAR_MARKER_RE.find(html) {
        highlights.push((m.start(), m.end(), Highlight::Year));
    }
    for m in NAME_ROW_RE.find_iter(html) {
        highlights.push((m.start(), m.end(), Highlight::Row));
    }
    highlights.sort_by_key(|h| h.0);

    let mut out = String::from("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
    out.push_str(".highlight-year { background-color: #FFFF00; }\n");
    out.push_str(".highlight-row { background-color: #90EE90; }\n");
    out.push_str("</style>\n</head>\n<body>\n");

    let mut last_pos = 0;
    for (start, end, kind) in highlights {
        if start < last_pos {
            continue;
        }
        out.push_str(&html[last_pos..start]);
        out.push_str(&format!(
            "<span class=\"{}\" title=\"Position: {}-{}\">",
            kind.css_class(), start, end
        ));
        out.push_str(&html[start..end]);
        out.push_str("</span>");
        last_pos = end;
    }
    out.push_str(&html[last_pos..]);

    out.push_str("\n</body>\n</html>");
    out
}

/// Writes the annotated copy of `html` to `path`.
pub fn save_annotated_html(html: &str, path: &Path) -> Result<(), StorageError> {
    fs::write(path, annotate(html))?;
    tracing::info!("Saved annotated HTML to {}", path.display());
    Ok(())
}
