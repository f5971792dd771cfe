use regex::Regex;
use std::sync::LazyLock;

// Block-level tags separate words; inline tags do not.
static BLOCK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(p|br|div|li|ul|ol|h[1-6])\b[^>]*>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Reduces a catalog HTML summary to plain text.
pub fn strip_markup(html: &str) -> String {
    let spaced = BLOCK_TAG.replace_all(html, " ");
    let without_tags = TAG.replace_all(&spaced, "");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    WHITESPACE.replace_all(decoded.trim(), " ").into_owned()
}
