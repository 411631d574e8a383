//! Fetch a user profile and everything they have submitted.
//!
//! Usage:
//!   cargo run --example user_items -- pg

use hn_client::Client;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let username = std::env::args().nth(1).unwrap_or_else(|| "pg".to_string());

    let client = Client::new()?;
    let user = client.user(&username).await?;
    println!(
        "{} (karma {}) has {} submissions",
        user.id,
        user.karma,
        user.submitted.len()
    );

    let items = client.items(&user.submitted).await?;
    for item in items.iter().take(20) {
        println!("- [{}] {}", item.id, item.title.as_deref().unwrap_or("(comment)"));
    }

    Ok(())
}
