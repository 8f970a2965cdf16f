//! Basic usage example for Waifu Client.

use std::env;
use waifu_client::{ApiConfig, WaifuClient, DEFAULT_BASE_URL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    // Point at a different host (e.g. a local stub) if requested
    let base_url =
        env::var("WAIFU_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let client = WaifuClient::new(ApiConfig::default().with_base_url(&base_url));
    println!("🖼️  Fetching waifu from {}\n", client.endpoint_url());

    match client.get_waifu().await {
        Ok(response) => {
            println!("✅ Status: {}", response.status());
            println!("{}", response.text().await?);
        }
        Err(e) => {
            match e.status() {
                Some(status) => eprintln!("❌ Server returned {}: {}", status, e),
                None => eprintln!("❌ Request failed: {}", e),
            }
        }
    }

    Ok(())
}
