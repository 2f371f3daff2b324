//! Markup stripping for report titles.

use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_STYLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>").unwrap()
});
static COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)</?[a-zA-Z!][^>]*>").unwrap());

/// Removes all markup from `text` and trims the result.
///
/// `<script>` and `<style>` elements are dropped together with their content,
/// comments are removed, and every remaining tag is stripped leaving its text.
/// Entities are left as-is.
///
/// # Examples
///
/// ```
/// use marker_scan::utils::markup::strip_tags;
///
/// assert_eq!(strip_tags("  <em>Hello</em> world "), "Hello world");
/// ```
pub fn strip_tags(text: &str) -> String {
    let without_code = SCRIPT_STYLE_REGEX.replace_all(text, "");
    let without_comments = COMMENT_REGEX.replace_all(&without_code, "");
    TAG_REGEX.replace_all(&without_comments, "").trim().to_string()
}
