//! Print the current front page.

use hn_client::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let client = Client::new()?;
    let stories = client.top_stories().await?;

    for (rank, story) in stories.iter().take(30).enumerate() {
        println!(
            "{:>2}. {} ({} points)",
            rank + 1,
            story.title.as_deref().unwrap_or("(untitled)"),
            story.score.unwrap_or(0),
        );
    }

    Ok(())
}
