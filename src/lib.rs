//! # bingrs
//!
//! Headless-browser Bing search: submit a query through the real search form,
//! read the visible text of the results container, and return every URL found
//! in it that contains the substring `https`.

pub mod browser;
pub mod extract;
pub mod user_agents;

use thiserror::Error;
use tracing::info;

/// Errors raised while driving the browser session.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to launch headless browser: {0}")]
    Launch(#[source] anyhow::Error),

    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("element {selector:?} not found on {url}: {source}")]
    MissingElement {
        selector: &'static str,
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("browser interaction failed: {0}")]
    Interaction(#[source] anyhow::Error),
}

/// Source of the rendered results-container text for a query.
///
/// The browser session is the real implementation; tests substitute a canned
/// one so the extraction pipeline runs without a browser.
pub trait ResultsTextProvider {
    fn results_text(&self, query: &str) -> Result<String, SearchError>;
}

/// Runs the full pipeline against any text provider: fetch the results text,
/// pull out URL-shaped substrings, keep the ones containing `https`.
pub fn search_urls_with<P: ResultsTextProvider>(
    provider: &P,
    query: &str
) -> Result<Vec<String>, SearchError> {
    let text = provider.results_text(query)?;
    Ok(extract::keep_https(extract::find_urls(&text)))
}

/// Searches Bing in a fresh headless browser session and returns the https
/// URLs found in the results container, in order of appearance.
///
/// # Arguments
///
/// * `query` - The search term, typed into the form verbatim.
/// * `timeout` - Seconds to wait for each page element before giving up.
pub async fn search_urls(query: &str, timeout: u64) -> Result<Vec<String>, SearchError> {
    let session = browser::BrowserSearch::launch(timeout)?;
    let urls = search_urls_with(&session, query)?;
    info!(count = urls.len(), "search finished");
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedText(&'static str);

    impl ResultsTextProvider for CannedText {
        fn results_text(&self, _query: &str) -> Result<String, SearchError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn keeps_https_and_drops_plain_http() {
        let provider = CannedText(
            "Example Site\nhttps://example.com/path - a result\n\
             Other Site\nhttp://example.org/path - another result"
        );
        let urls = search_urls_with(&provider, "weather").unwrap();

        assert_eq!(urls, vec!["https://example.com/path"]);
    }

    #[test]
    fn url_free_text_gives_empty_list() {
        let provider = CannedText("no links here, just prose about the weather");
        let urls = search_urls_with(&provider, "weather").unwrap();

        assert!(urls.is_empty());
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let provider = CannedText(
            "https://a.example/one then https://b.example/two then https://a.example/one"
        );
        let urls = search_urls_with(&provider, "anything").unwrap();

        assert_eq!(
            urls,
            vec![
                "https://a.example/one",
                "https://b.example/two",
                "https://a.example/one"
            ]
        );
    }

    #[test]
    fn provider_error_propagates() {
        struct Failing;
        impl ResultsTextProvider for Failing {
            fn results_text(&self, _query: &str) -> Result<String, SearchError> {
                Err(SearchError::Interaction(anyhow::anyhow!("tab closed")))
            }
        }

        let result = search_urls_with(&Failing, "weather");
        assert!(matches!(result, Err(SearchError::Interaction(_))));
    }
}
