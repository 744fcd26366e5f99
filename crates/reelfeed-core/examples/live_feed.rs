use reelfeed_core::{Category, FeedController, TmdbClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("TMDB_API_KEY")?;
    let controller = FeedController::new(TmdbClient::new(api_key)?);

    println!("Loading the Discover feed...\n");
    controller.load_more(Category::Discover).await?;

    let slice = controller.category_state(Category::Discover).await;
    println!(
        "Page {} of {} ({} items):\n",
        slice.current_page(),
        slice.total_pages(),
        slice.items().len()
    );

    for (i, item) in slice.items().iter().enumerate() {
        let title = item.media.display_title().unwrap_or("<untitled>");
        let rating = item
            .media
            .vote_average
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "—".to_string());
        let trailer = item
            .trailer_key
            .as_deref()
            .map(|key| format!("https://youtu.be/{key}"))
            .unwrap_or_else(|| "no trailer".to_string());
        println!("  {}. {} [{}] - {}", i + 1, title, rating, trailer);
    }

    println!("\nLoading one more random page...");
    controller.load_more(Category::Discover).await?;

    let slice = controller.category_state(Category::Discover).await;
    println!(
        "Now {} items across pages {:?}.",
        slice.items().len(),
        slice.fetched_pages()
    );

    Ok(())
}
