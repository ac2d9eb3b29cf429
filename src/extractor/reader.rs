use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::extractor::model::normalize_whitespace;

static CONTAINER_PARAGRAPHS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("article p, main p, [role='main'] p").expect("static selector must parse")
});

static ALL_PARAGRAPHS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("static selector must parse"));

/// Visible paragraph text in document order.
///
/// Paragraphs inside article/main containers win; pages without such
/// containers fall back to every `<p>` in the document.
pub fn paragraphs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let preferred = collect(&document, &CONTAINER_PARAGRAPHS);
    if !preferred.is_empty() {
        return preferred;
    }
    collect(&document, &ALL_PARAGRAPHS)
}

/// Paragraphs joined one per line, each terminated by a newline.
pub fn extract_text(html: &str) -> String {
    let mut text = String::new();
    for paragraph in paragraphs(html) {
        text.push_str(&paragraph);
        text.push('\n');
    }
    text
}

fn collect(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|element| normalize_whitespace(&element.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_article_paragraphs() {
        let html = r#"<html><body>
            <header><p>Subscribe now</p></header>
            <article><p>First point.</p><div><p>Second   point.</p></div></article>
            <footer><p>Copyright</p></footer>
        </body></html>"#;

        assert_eq!(paragraphs(html), vec!["First point.", "Second point."]);
    }

    #[test]
    fn test_article_and_main_keep_document_order() {
        let html = r#"<main><p>A</p></main><article><p>B</p></article><main><p>C</p></main>"#;
        assert_eq!(paragraphs(html), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_falls_back_to_all_paragraphs() {
        let html = "<html><body><div><p>One</p></div><p>  </p><p>Two</p></body></html>";
        assert_eq!(extract_text(html), "One\nTwo\n");
    }

    #[test]
    fn test_nested_inline_markup_is_flattened() {
        let html = "<article><p>Hello <b>bold</b> and <a href='/x'>linked</a> text</p></article>";
        assert_eq!(extract_text(html), "Hello bold and linked text\n");
    }

    #[test]
    fn test_no_paragraphs_yields_empty_text() {
        assert_eq!(extract_text("<html><body><div>just a div</div></body></html>"), "");
    }

    #[test]
    fn test_scripts_are_not_paragraph_text() {
        let html = "<body><script>var p = '<p>fake</p>';</script><p>Real</p></body>";
        assert_eq!(extract_text(html), "Real\n");
    }
}
