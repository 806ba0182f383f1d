//! # sharpapi-hospitality-categories
//!
//! Rust client for SharpAPI.com's hospitality product categorization endpoint.
//!
//! SharpAPI processes jobs asynchronously: the client submits a product
//! name (plus optional locale, tone, and context parameters), the API queues
//! a categorization job, and the dispatch response carries a status URL the
//! caller polls for the finished category list. This crate covers the submit
//! half of that exchange; polling the status URL is up to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sharpapi_hospitality_categories::{CategoriesOptions, HospitalityCategoriesClient};
//!
//! #[tokio::main]
//! async fn main() -> sharpapi_hospitality_categories::Result<()> {
//!     let client = HospitalityCategoriesClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let options = CategoriesOptions {
//!         city: Some("Paris".into()),
//!         country: Some("France".into()),
//!         ..Default::default()
//!     };
//!     let status_url = client
//!         .hospitality_product_categories("Luxury Suite", &options)
//!         .await?;
//!     println!("poll {status_url}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`categories`] | Categorization client, builder, and request payload shaping |
//! | [`jobs`] | Registry of job-type endpoint paths |
//! | [`transport`] | Transport capability trait and the default reqwest implementation |

pub mod categories;
pub mod jobs;
pub mod transport;

// Re-export main types for convenience
pub use categories::{
    CategoriesOptions, HospitalityCategoriesClient, HospitalityCategoriesClientBuilder,
};
pub use jobs::JobType;
pub use transport::{HttpTransport, JobTransport};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
