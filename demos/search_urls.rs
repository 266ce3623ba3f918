use bingrs::search_urls;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let urls = search_urls("Best restaurants in San Francisco", 30).await?;

    println!("Search Results (https URLs only):");
    for (i, url) in urls.iter().enumerate() {
        println!("{}. {}", i + 1, url);
    }

    Ok(())
}
