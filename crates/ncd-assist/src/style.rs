//! Terminal formatting helpers.

use ncd_assist_engine::SourceRef;
use owo_colors::OwoColorize;

/// Excerpts longer than this are cut in the sources list.
const EXCERPT_MAX_CHARS: usize = 200;

/// The styled inline form of a `[k]` citation marker.
pub fn citation_marker(k: usize, _source: &SourceRef) -> String {
    format!("[{k}]").bright_blue().bold().to_string()
}

/// One formatted line per source for the sources block, in citation
/// order.
pub fn source_lines(sources: &[SourceRef]) -> Vec<String> {
    sources
        .iter()
        .enumerate()
        .map(|(idx, source)| {
            format!(
                "{} {}: {}",
                format!("[{}]", idx + 1).bright_blue(),
                source.source.bold(),
                excerpt(&source.content).dimmed()
            )
        })
        .collect()
}

/// Cuts an excerpt to [`EXCERPT_MAX_CHARS`] characters, always on a
/// char boundary.
fn excerpt(content: &str) -> String {
    let mut chars = content.char_indices();
    match chars.nth(EXCERPT_MAX_CHARS) {
        Some((byte_idx, _)) => format!("{}...", &content[..byte_idx]),
        None => content.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(label: &str, content: &str) -> SourceRef {
        SourceRef {
            source: label.to_owned(),
            content: content.to_owned(),
        }
    }

    #[test]
    fn test_short_excerpt_kept_whole() {
        assert_eq!(excerpt("short text"), "short text");
    }

    #[test]
    fn test_long_excerpt_truncated() {
        let long = "x".repeat(300);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), EXCERPT_MAX_CHARS + 3);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_excerpt_cuts_on_char_boundary() {
        let long = "é".repeat(250);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), EXCERPT_MAX_CHARS + 3);
    }

    #[test]
    fn test_source_lines_are_one_based() {
        let lines = source_lines(&[
            source("WHO", "Diabetes fact sheet"),
            source("CDC", "Diabetes basics"),
        ]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[1]"));
        assert!(lines[0].contains("WHO"));
        assert!(lines[1].contains("[2]"));
        assert!(lines[1].contains("CDC"));
    }

    #[test]
    fn test_citation_marker_keeps_index_text() {
        let marker = citation_marker(2, &source("WHO", "excerpt"));
        assert!(marker.contains("[2]"));
    }
}
