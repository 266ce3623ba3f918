//! # User Agents Module
//!
//! This module provides functionality to randomly select a User-Agent string
//! for the browser tab, so the session presents as an ordinary desktop
//! browser.

use rand::seq::SliceRandom;

/// Returns a randomly selected User-Agent string from the predefined list.
///
/// # Panics
///
/// Panics if the `USER_AGENT_LIST` is empty.
pub fn pick() -> &'static str {
    USER_AGENT_LIST.choose(&mut rand::thread_rng()).expect("User-Agent list is empty")
}

const USER_AGENT_LIST: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.2478.51",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick() {
        let ua = pick();
        assert!(USER_AGENT_LIST.contains(&ua));
    }
}
