//! Basic usage example
//!
//! Submits a hospitality product categorization job and prints the status URL
//! to poll for results.
//!
//! API key is configured via environment variable:
//! - SHARP_API_KEY
//!
//! Usage:
//!   SHARP_API_KEY="your_key" cargo run --example basic_usage

use sharpapi_hospitality_categories::{CategoriesOptions, HospitalityCategoriesClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    if std::env::var("SHARP_API_KEY").is_err() {
        eprintln!("Warning: SHARP_API_KEY not set. This example will fail to build the client.");
    }

    let client = HospitalityCategoriesClient::builder().build()?;

    let options = CategoriesOptions {
        city: Some("Paris".into()),
        country: Some("France".into()),
        language: Some("en".into()),
        max_quantity: Some(5),
        ..Default::default()
    };

    let status_url = client
        .hospitality_product_categories("Luxury Suite with Eiffel Tower view", &options)
        .await?;

    println!("Job queued. Poll for results at:\n{status_url}");

    Ok(())
}
