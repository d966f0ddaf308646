//! HTML metadata extraction

use miniperplx_application::FetchError;
use miniperplx_domain::PageMetadata;
use scraper::{Html, Selector};

const TITLE: &str = "head title";
const OG_TITLE: &str = r#"meta[property="og:title"]"#;
const DESCRIPTION: &str = r#"meta[name="description"]"#;
const OG_DESCRIPTION: &str = r#"meta[property="og:description"]"#;

/// Extract the page title and description from an HTML document.
///
/// Title comes from `<head><title>`, falling back to `og:title`.
/// Description comes from `<meta name="description">`, falling back to
/// `og:description`. An empty value counts as absent; a field with no
/// source at all is an empty string.
pub fn extract_metadata(html: &str) -> Result<PageMetadata, FetchError> {
    let document = Html::parse_document(html);

    let title = first_non_empty([
        element_text(&document, TITLE)?,
        meta_content(&document, OG_TITLE)?,
    ]);
    let description = first_non_empty([
        meta_content(&document, DESCRIPTION)?,
        meta_content(&document, OG_DESCRIPTION)?,
    ]);

    Ok(PageMetadata { title, description })
}

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Text of every matching element, concatenated
fn element_text(document: &Html, css: &str) -> Result<String, FetchError> {
    let selector = selector(css)?;
    Ok(document
        .select(&selector)
        .flat_map(|element| element.text())
        .collect())
}

/// `content` attribute of the first matching element
fn meta_content(document: &Html, css: &str) -> Result<String, FetchError> {
    let selector = selector(css)?;
    Ok(document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .unwrap_or_default()
        .to_string())
}

fn first_non_empty<const N: usize>(candidates: [String; N]) -> String {
    candidates
        .into_iter()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_description() {
        let html = r#"<html><head>
            <title>Example</title>
            <meta name="description" content="An example page">
        </head><body></body></html>"#;

        let metadata = extract_metadata(html).unwrap();
        assert_eq!(metadata, PageMetadata::new("Example", "An example page"));
    }

    #[test]
    fn test_open_graph_fallbacks() {
        let html = r#"<html><head>
            <meta property="og:title" content="OG Title">
            <meta property="og:description" content="OG description">
        </head></html>"#;

        let metadata = extract_metadata(html).unwrap();
        assert_eq!(metadata, PageMetadata::new("OG Title", "OG description"));
    }

    #[test]
    fn test_only_og_title() {
        let html = r#"<html><head><meta property="og:title" content="OG Title"></head></html>"#;

        let metadata = extract_metadata(html).unwrap();
        assert_eq!(metadata, PageMetadata::new("OG Title", ""));
    }

    #[test]
    fn test_empty_values_fall_through() {
        let html = r#"<html><head>
            <title></title>
            <meta property="og:title" content="OG Title">
            <meta name="description" content="">
            <meta property="og:description" content="OG description">
        </head></html>"#;

        let metadata = extract_metadata(html).unwrap();
        assert_eq!(metadata, PageMetadata::new("OG Title", "OG description"));
    }

    #[test]
    fn test_primary_sources_win() {
        let html = r#"<html><head>
            <title>Primary</title>
            <meta property="og:title" content="Secondary">
            <meta name="description" content="Main">
            <meta property="og:description" content="Other">
        </head></html>"#;

        let metadata = extract_metadata(html).unwrap();
        assert_eq!(metadata, PageMetadata::new("Primary", "Main"));
    }

    #[test]
    fn test_missing_everything_is_empty() {
        let metadata = extract_metadata("<html><body><p>hi</p></body></html>").unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_non_html_body() {
        let metadata = extract_metadata(r#"{"not":"html"}"#).unwrap();
        assert_eq!(metadata, PageMetadata::default());
    }
}
