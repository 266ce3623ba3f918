use bingrs::{ search_urls_with, ResultsTextProvider, SearchError };

/// A canned text provider, standing in for the live browser session.
struct SavedResultsPage;

impl ResultsTextProvider for SavedResultsPage {
    fn results_text(&self, _query: &str) -> Result<String, SearchError> {
        Ok("Rust Programming Language\nhttps://www.rust-lang.org/\n\
            A language empowering everyone.\n\
            The Rust Book\nhttps://doc.rust-lang.org/book/\n\
            Mirror (plain http): http://mirror.example.org/rust"
            .to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let urls = search_urls_with(&SavedResultsPage, "rust language")?;

    println!("{:?}", urls);

    Ok(())
}
