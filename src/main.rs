use bingrs::search_urls;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Seconds to wait for each page element before giving up.
const WAIT_TIMEOUT_SECS: u64 = 30;

/// Search Bing in a headless browser and print every https URL found in the
/// visible results.
#[derive(Debug, Parser)]
#[command(name = "bingrs", version, about)]
struct Cli {
    /// Search term, typed into the form verbatim.
    query: String,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only the result list.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match search_urls(&cli.query, WAIT_TIMEOUT_SECS).await {
        Ok(urls) => println!("{:?}", urls),
        Err(err) => {
            eprintln!("bingrs error: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_argument_is_required() {
        let result = Cli::try_parse_from(["bingrs"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_single_query_argument_parses() {
        let cli = Cli::try_parse_from(["bingrs", "weather"]).unwrap();
        assert_eq!(cli.query, "weather");
    }

    #[test]
    fn test_unknown_flags_are_rejected() {
        let result = Cli::try_parse_from(["bingrs", "--json", "weather"]);
        assert!(result.is_err());
    }
}
