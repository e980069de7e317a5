//! Citation rendering for assistant messages.

use ncd_assist_engine::SourceRef;

use crate::transcript::Message;

/// Produces the display form of a message, wrapping each inline `[k]`
/// citation marker via `style`.
///
/// `style` receives the 1-based source index and the source the marker
/// is bound to, and returns the replacement text for every occurrence
/// of that marker. Messages without sources are returned unchanged.
///
/// Replacement is literal substring substitution over the stored
/// content: the scheme cannot tell a citation `[1]` apart from
/// incidental bracketed text. Markers are replaced highest index
/// first, which reduces (but does not eliminate) collisions between a
/// low index and the prefix of a longer one. Known limitation, kept
/// for compatibility with the stored content format.
///
/// Call this once per display pass, on stored content only; feeding
/// already rendered output back in is not supported.
pub fn render_citations<F>(message: &Message, mut style: F) -> String
where
    F: FnMut(usize, &SourceRef) -> String,
{
    if message.sources.is_empty() {
        return message.content.clone();
    }

    let mut content = message.content.clone();
    for (idx, source) in message.sources.iter().enumerate().rev() {
        let k = idx + 1;
        let marker = format!("[{k}]");
        if content.contains(&marker) {
            content = content.replace(&marker, &style(k, source));
        }
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(label: &str) -> SourceRef {
        SourceRef {
            source: label.to_owned(),
            content: format!("excerpt from {label}"),
        }
    }

    fn tag(k: usize, source: &SourceRef) -> String {
        format!("<cite {k}={}>", source.source)
    }

    #[test]
    fn test_identity_without_sources() {
        let message =
            Message::assistant("No retrieval hits here. [1]", Vec::new());
        assert_eq!(
            render_citations(&message, tag),
            "No retrieval hits here. [1]"
        );
    }

    #[test]
    fn test_markers_bound_to_sources() {
        let message = Message::assistant(
            "Diabetes is [1] a chronic condition [2].",
            vec![source("WHO"), source("CDC")],
        );
        assert_eq!(
            render_citations(&message, tag),
            "Diabetes is <cite 1=WHO> a chronic condition <cite 2=CDC>."
        );
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let message = Message::assistant(
            "[1] says so, and [1] repeats it.",
            vec![source("WHO")],
        );
        assert_eq!(
            render_citations(&message, tag),
            "<cite 1=WHO> says so, and <cite 1=WHO> repeats it."
        );
    }

    #[test]
    fn test_marker_without_source_stays_literal() {
        let message = Message::assistant(
            "Backed by [1], but [3] has no source.",
            vec![source("WHO"), source("CDC")],
        );
        assert_eq!(
            render_citations(&message, tag),
            "Backed by <cite 1=WHO>, but [3] has no source."
        );
    }

    #[test]
    fn test_double_digit_markers_replaced_first() {
        let sources: Vec<_> = (1..=10)
            .map(|k| source(&format!("doc{k}")))
            .collect();
        let message = Message::assistant(
            "See [10] and also [1].",
            sources,
        );
        assert_eq!(
            render_citations(&message, tag),
            "See <cite 10=doc10> and also <cite 1=doc1>."
        );
    }

    #[test]
    fn test_message_is_not_mutated() {
        let message = Message::assistant(
            "Cancer screening helps. [1]",
            vec![source("WHO")],
        );
        let _ = render_citations(&message, tag);
        assert_eq!(message.content, "Cancer screening helps. [1]");
    }
}
