//! Message Markup
//!
//! Bubble content supports exactly two constructs: newlines become line
//! breaks and `**X**` becomes bold. Content is parsed into a small typed tree
//! so renderers never have to trust raw HTML.
//!
//! Matching is non-greedy and left to right: the first `**` opens, the next
//! `**` closes. A bold span may contain line breaks and may be empty. An
//! unmatched `**` stays as literal text.

/// Inline markup node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Plain text, not yet escaped
    Text(String),
    /// Hard line break
    LineBreak,
    /// Bold span; children are only `Text` and `LineBreak`
    Bold(Vec<Inline>),
}

const BOLD_MARKER: &str = "**";

/// Parse message content into inline nodes
pub fn parse(content: &str) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut rest = content;

    while let Some(open) = rest.find(BOLD_MARKER) {
        let after_open = &rest[open + BOLD_MARKER.len()..];
        let Some(close) = after_open.find(BOLD_MARKER) else {
            break;
        };

        push_plain(&mut nodes, &rest[..open]);

        let mut children = Vec::new();
        push_plain(&mut children, &after_open[..close]);
        nodes.push(Inline::Bold(children));

        rest = &after_open[close + BOLD_MARKER.len()..];
    }

    push_plain(&mut nodes, rest);
    nodes
}

fn push_plain(nodes: &mut Vec<Inline>, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(Inline::LineBreak);
        }
        if !line.is_empty() {
            nodes.push(Inline::Text(line.to_owned()));
        }
    }
}

/// Escape the characters that are significant in HTML text
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render nodes to an HTML string
///
/// The output is the reference form of a bubble's content, e.g.
/// `a<b>**c**\nd` becomes `a&lt;b&gt;<strong>c</strong><br/>d`.
pub fn to_html(nodes: &[Inline]) -> String {
    let mut out = String::new();
    write_html(&mut out, nodes);
    out
}

fn write_html(out: &mut String, nodes: &[Inline]) {
    for node in nodes {
        match node {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::LineBreak => out.push_str("<br/>"),
            Inline::Bold(children) => {
                out.push_str("<strong>");
                write_html(out, children);
                out.push_str("</strong>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.into())
    }

    fn render_html(content: &str) -> String {
        to_html(&parse(content))
    }

    #[test]
    fn test_reference_rendering() {
        assert_eq!(
            render_html("a<b>**c**\nd"),
            "a&lt;b&gt;<strong>c</strong><br/>d"
        );
    }

    #[test]
    fn test_parse_tree() {
        assert_eq!(
            parse("a<b>**c**\nd"),
            vec![
                text("a<b>"),
                Inline::Bold(vec![text("c")]),
                Inline::LineBreak,
                text("d"),
            ]
        );
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("hello"), vec![text("hello")]);
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_ampersand_escaped_once() {
        assert_eq!(render_html("Tom & Jerry &amp;"), "Tom &amp; Jerry &amp;amp;");
    }

    #[test]
    fn test_consecutive_newlines() {
        assert_eq!(render_html("a\n\nb\n"), "a<br/><br/>b<br/>");
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(
            render_html("**one** and **two**"),
            "<strong>one</strong> and <strong>two</strong>"
        );
    }

    #[test]
    fn test_bold_spans_line_break() {
        assert_eq!(render_html("**Lahore\nKarachi**"), "<strong>Lahore<br/>Karachi</strong>");
    }

    #[test]
    fn test_unmatched_marker_is_literal() {
        assert_eq!(render_html("a**b"), "a**b");
        assert_eq!(render_html("**x** y**"), "<strong>x</strong> y**");
    }

    #[test]
    fn test_empty_and_odd_markers() {
        assert_eq!(render_html("****"), "<strong></strong>");
        assert_eq!(render_html("***a**"), "<strong>*a</strong>");
    }

    #[test]
    fn test_markup_in_content_is_not_trusted() {
        assert_eq!(
            render_html("<strong>x</strong>"),
            "&lt;strong&gt;x&lt;/strong&gt;"
        );
    }
}
