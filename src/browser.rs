//! # Browser Session Module
//!
//! Drives one headless Chrome session through the Bing search form and reads
//! back the rendered text of the results container.

use headless_chrome::{ Browser, LaunchOptionsBuilder };
use anyhow::Context;
use std::time::Duration;
use tracing::{ debug, info };

use crate::user_agents;
use crate::{ ResultsTextProvider, SearchError };

const BING_HOME: &str = "https://www.bing.com/";
const QUERY_INPUT: &str = "#sb_form_q";
const RESULTS_CONTAINER: &str = "#b_results";

/// A headless browser session pointed at Bing.
///
/// The underlying browser process is closed when this value is dropped, on
/// error paths included.
pub struct BrowserSearch {
    browser: Browser,
    wait_timeout: Duration,
}

impl BrowserSearch {
    /// Launches a headless browser.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Seconds to wait for each element lookup before failing.
    pub fn launch(timeout: u64) -> Result<Self, SearchError> {
        let launch_options = LaunchOptionsBuilder::default()
            .headless(true)
            .build()
            .context("failed to build launch options")
            .map_err(SearchError::Launch)?;

        info!("launching headless browser");
        let browser = Browser::new(launch_options).map_err(SearchError::Launch)?;

        Ok(BrowserSearch {
            browser,
            wait_timeout: Duration::from_secs(timeout),
        })
    }

    /// Submits `query` through the Bing search form and returns the rendered
    /// text of the results container.
    fn results_page_text(&self, query: &str) -> Result<String, SearchError> {
        let tab = self
            .browser
            .wait_for_initial_tab()
            .map_err(SearchError::Launch)?;
        tab.set_default_timeout(self.wait_timeout);

        let user_agent = user_agents::pick();
        tab.set_user_agent(user_agent, None, None)
            .map_err(SearchError::Interaction)?;

        info!(url = BING_HOME, "opening search home page");
        tab.navigate_to(BING_HOME).map_err(|source| SearchError::Navigation {
            url: BING_HOME.to_string(),
            source,
        })?;
        tab.wait_until_navigated().map_err(|source| SearchError::Navigation {
            url: BING_HOME.to_string(),
            source,
        })?;

        let input = tab
            .wait_for_element(QUERY_INPUT)
            .map_err(|source| SearchError::MissingElement {
                selector: QUERY_INPUT,
                url: tab.get_url(),
                source,
            })?;
        input.click().map_err(SearchError::Interaction)?;

        debug!("typing query into search form");
        tab.type_str(query).map_err(SearchError::Interaction)?;
        tab.press_key("Enter").map_err(SearchError::Interaction)?;
        tab.wait_until_navigated().map_err(|source| SearchError::Navigation {
            url: tab.get_url(),
            source,
        })?;

        // Reload the landed URL so the results document is fully loaded
        // rather than mid-render from the form submission.
        let results_url = tab.get_url();
        debug!(url = %results_url, "reloading results page");
        tab.navigate_to(&results_url).map_err(|source| SearchError::Navigation {
            url: results_url.clone(),
            source,
        })?;
        tab.wait_until_navigated().map_err(|source| SearchError::Navigation {
            url: results_url.clone(),
            source,
        })?;

        let container = tab
            .wait_for_element(RESULTS_CONTAINER)
            .map_err(|source| SearchError::MissingElement {
                selector: RESULTS_CONTAINER,
                url: results_url,
                source,
            })?;

        let text = container.get_inner_text().map_err(SearchError::Interaction)?;
        debug!(chars = text.len(), "read results container text");

        Ok(text)
    }
}

impl ResultsTextProvider for BrowserSearch {
    fn results_text(&self, query: &str) -> Result<String, SearchError> {
        self.results_page_text(query)
    }
}
