//! Hyperlink extraction from fetched documents.

use scraper::{Html, Selector};

/// Collect every `href` attribute from anchor elements, in document order.
///
/// Values are passed through verbatim: relative paths, absolute URLs, and
/// empty strings alike.
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_hrefs_in_document_order() {
        let html = r#"<html><body>
            <a href="/x">relative</a>
            <p>noise</p>
            <a href="https://y">absolute</a>
            <a href="">empty</a>
        </body></html>"#;

        let links = extract_links(html);
        assert_eq!(links, vec!["/x", "https://y", ""]);
    }

    #[test]
    fn anchors_without_href_are_skipped() {
        let html = r#"<a name="top">anchor</a><a href="/only">link</a>"#;
        assert_eq!(extract_links(html), vec!["/only"]);
    }

    #[test]
    fn no_anchors_yields_no_links() {
        assert!(extract_links("<html><body><p>plain</p></body></html>").is_empty());
    }
}
