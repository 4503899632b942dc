// ABOUTME: HTML helpers for author strings pulled out of feed markup.
// ABOUTME: Provides tag stripping backed by the scraper HTML parser.

use scraper::Html;

/// Removes HTML markup, keeping only text nodes with entities decoded.
///
/// Whitespace is preserved as-is; callers trim.
pub fn strip_tags(s: &str) -> String {
    if !s.contains('<') && !s.contains('&') {
        return s.to_string();
    }
    let fragment = Html::parse_fragment(s);
    fragment.root_element().text().collect()
}
