//! # URL Extraction Module
//!
//! Pulls URL-shaped substrings out of free text and filters them down to the
//! ones containing `https`.

use regex::Regex;
use url::Url;

/// Punctuation that sticks to a URL when it ends a sentence or sits inside
/// brackets in the rendered page text.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '\'', '"'];

/// Scans `text` for URL-shaped substrings.
///
/// Candidates are located by scheme (`http://` or `https://`), trimmed of
/// trailing punctuation, and kept only if they parse as well-formed URLs.
/// Order of appearance is preserved and duplicates are not removed.
///
/// # Arguments
///
/// * `text` - Free text, typically the rendered results-container content.
///
/// # Returns
///
/// A `Vec<String>` of the URLs found, possibly empty.
pub fn find_urls(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let pattern = Regex::new(r#"https?://[^\s"'<>]+"#).expect("URL pattern is valid");

    pattern
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION).to_string())
        .filter(|candidate| Url::parse(candidate).is_ok())
        .collect()
}

/// Retains the entries containing the literal substring `https`.
///
/// This is substring containment, not a scheme check: an `http://` URL that
/// carries `https` in a query parameter passes too.
pub fn keep_https(urls: Vec<String>) -> Vec<String> {
    urls.into_iter().filter(|url| url.contains("https")).collect()
}
