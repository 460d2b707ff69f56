//! Line-oriented note conversion.
//!
//! Notes use a tiny subset of markdown. Each line is classified on its own and
//! the first matching rule wins:
//!
//! 1. `# Title` sets the page title (the last one wins) and emits nothing
//! 2. `## Heading` emits `<h2>`
//! 3. `[text](target)` emits an anchor followed by `<br>`
//! 4. any other non-blank line emits `<p>`
//! 5. blank lines are dropped
//!
//! Nothing is HTML-escaped. Notes are trusted, self-authored content and
//! their markup passes straight through to the page.

use crate::models::ParsedNote;

const TITLE_PREFIX: &str = "# ";
const SUBHEADING_PREFIX: &str = "## ";
const LINK_SEPARATOR: &str = "](";

/// Classification of a single note line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Title(&'a str),
    Subheading(&'a str),
    Link { text: &'a str, target: &'a str },
    Paragraph(&'a str),
    Blank,
}

impl LineKind<'_> {
    /// HTML fragment for this line, if it produces one
    pub fn to_fragment(&self) -> Option<String> {
        match self {
            LineKind::Title(_) | LineKind::Blank => None,
            LineKind::Subheading(text) => Some(format!("<h2>{}</h2>", text)),
            LineKind::Link { text, target } => Some(format!(
                "<a href=\"{}\" class=\"href\">{}</a><br>",
                target, text
            )),
            LineKind::Paragraph(text) => Some(format!("<p>{}</p>", text)),
        }
    }
}

/// Classify one line of a note
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
        return LineKind::Title(rest.trim());
    }

    if let Some(rest) = line.strip_prefix(SUBHEADING_PREFIX) {
        return LineKind::Subheading(rest.trim());
    }

    if line.starts_with('[') {
        if let Some((text, target)) = line.split_once(LINK_SEPARATOR) {
            return LineKind::Link {
                text: text[1..].trim(),
                target: drop_last_char(target).trim(),
            };
        }
    }

    match line.trim() {
        "" => LineKind::Blank,
        text => LineKind::Paragraph(text),
    }
}

/// Strip the closing `)` of a link target.
///
/// The last character is removed unconditionally, so a link line missing its
/// closing parenthesis loses the final character of its target.
fn drop_last_char(s: &str) -> &str {
    match s.char_indices().next_back() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Convert a whole note into its title and ordered HTML fragments
///
/// # Example
///
/// ```
/// use notesite_core::markdown::convert_note;
///
/// let parsed = convert_note("# Hello World\nSome text.");
/// assert_eq!(parsed.title.as_deref(), Some("Hello World"));
/// assert_eq!(parsed.fragments, vec!["<p>Some text.</p>".to_string()]);
/// ```
pub fn convert_note(note: &str) -> ParsedNote {
    let mut parsed = ParsedNote::default();

    for line in note.split('\n') {
        let kind = classify_line(line);
        if let LineKind::Title(title) = kind {
            if parsed.title.is_some() {
                tracing::debug!("Title overwritten by later line: {}", title);
            }
            parsed.title = Some(title.to_string());
            continue;
        }
        if let Some(fragment) = kind.to_fragment() {
            parsed.fragments.push(fragment);
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_classify_title() {
        assert_eq!(classify_line("# Hello World  "), LineKind::Title("Hello World"));
        assert_eq!(classify_line("#NoSpace"), LineKind::Paragraph("#NoSpace"));
    }

    #[test]
    fn test_classify_subheading() {
        assert_eq!(classify_line("## Section "), LineKind::Subheading("Section"));
        assert_eq!(classify_line("### Deeper"), LineKind::Paragraph("### Deeper"));
    }

    #[test]
    fn test_classify_link() {
        assert_eq!(
            classify_line("[ Link ](http://x.com)"),
            LineKind::Link {
                text: "Link",
                target: "http://x.com"
            }
        );
        // Only the first separator splits
        assert_eq!(
            classify_line("[a](b](c)"),
            LineKind::Link {
                text: "a",
                target: "b](c"
            }
        );
    }

    #[test]
    fn test_link_without_closing_paren_loses_last_char() {
        assert_eq!(
            classify_line("[Site](http://x.com"),
            LineKind::Link {
                text: "Site",
                target: "http://x.co"
            }
        );
        assert_eq!(
            classify_line("[Empty]("),
            LineKind::Link {
                text: "Empty",
                target: ""
            }
        );
    }

    #[test]
    fn test_bracket_without_separator_is_paragraph() {
        assert_eq!(
            classify_line("[not a link] (really)"),
            LineKind::Paragraph("[not a link] (really)")
        );
    }

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("   \t"), LineKind::Blank);
        assert_eq!(classify_line("\r"), LineKind::Blank);
    }

    #[test]
    fn test_fragments() {
        assert_eq!(classify_line("# T").to_fragment(), None);
        assert_eq!(
            classify_line("## Sec").to_fragment().as_deref(),
            Some("<h2>Sec</h2>")
        );
        assert_eq!(
            classify_line("[Link](http://x.com)").to_fragment().as_deref(),
            Some(r#"<a href="http://x.com" class="href">Link</a><br>"#)
        );
        assert_eq!(
            classify_line("  hi  ").to_fragment().as_deref(),
            Some("<p>hi</p>")
        );
    }

    #[test]
    fn test_simple_note() {
        let parsed = convert_note("# Hello World\nSome text.");
        assert_eq!(parsed.title.as_deref(), Some("Hello World"));
        assert_eq!(parsed.content(), "<p>Some text.</p>");
    }

    #[test]
    fn test_mixed_note_keeps_order() {
        let parsed = convert_note("# My: Title\n## Sec\n[Link](http://x.com)\n\nAfter\n");
        assert_eq!(parsed.title.as_deref(), Some("My: Title"));
        assert_snapshot!(parsed.content(), @r#"
        <h2>Sec</h2>
        <a href="http://x.com" class="href">Link</a><br>
        <p>After</p>
        "#);
    }

    #[test]
    fn test_blank_lines_produce_no_paragraphs() {
        let parsed = convert_note("First\n\n   \n\nSecond\n\n");
        assert_eq!(parsed.fragments, vec!["<p>First</p>", "<p>Second</p>"]);
        assert!(!parsed.content().contains("<p></p>"));
    }

    #[test]
    fn test_last_title_wins() {
        let parsed = convert_note("# First\nbody\n# Second");
        assert_eq!(parsed.title.as_deref(), Some("Second"));
        assert_eq!(parsed.fragments, vec!["<p>body</p>"]);
    }

    #[test]
    fn test_untitled_note() {
        let parsed = convert_note("just a paragraph");
        assert_eq!(parsed.title, None);
        assert_eq!(parsed.title_or_empty(), "");
    }

    #[test]
    fn test_markup_is_not_escaped() {
        let parsed = convert_note("<em>raw</em> & more");
        assert_eq!(parsed.fragments, vec!["<p><em>raw</em> & more</p>"]);
    }
}
