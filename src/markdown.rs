//! Tip Markdown
//!
//! Renders the short markdown bodies of travel tips with pulldown-cmark.
//! Raw HTML in the source is escaped; tip bodies are text only.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

/// Render markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Render markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

/// Plain text of a markdown snippet, for `title` attributes and aria labels
pub fn plain_text(text: &str) -> String {
    Parser::new_ext(text, get_options())
        .filter_map(|event| match event {
            Event::Text(t) | Event::Code(t) => Some(t),
            Event::SoftBreak | Event::HardBreak => Some(CowStr::Borrowed(" ")),
            _ => None,
        })
        .collect::<Vec<_>>()
        .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis() {
        assert_eq!(
            parse_markdown_inline("**Roll** your clothes"),
            "<strong>Roll</strong> your clothes"
        );
        assert_eq!(parse_markdown_inline("*cubes*"), "<em>cubes</em>");
    }

    #[test]
    fn test_block_output_keeps_paragraph() {
        assert_eq!(parse_markdown("Pack light"), "<p>Pack light</p>\n");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown_inline("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(plain_text("Keep *digital copies* handy"), "Keep digital copies handy");
    }
}
