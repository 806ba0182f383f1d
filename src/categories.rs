//! Hospitality product categorization client.
//!
//! Submits a categorization job to SharpAPI and returns the status URL the
//! caller polls for eventual results. The remote pipeline scores suitable
//! categories for the product with relevance weights (1.0-10.0); this client
//! only shapes the payload and dispatches it.

use crate::jobs::JobType;
use crate::transport::{HttpTransport, JobTransport};
use crate::{Error, ErrorContext, Result};
use serde::Serialize;
use std::sync::Arc;

/// Optional parameters for a categorization request. Absent fields are left
/// out of the payload entirely.
#[derive(Debug, Clone, Default)]
pub struct CategoriesOptions {
    pub city: Option<String>,
    pub country: Option<String>,
    /// Language of the generated categories (e.g. "en", "French").
    pub language: Option<String>,
    /// Upper bound on the number of returned categories.
    pub max_quantity: Option<u32>,
    pub voice_tone: Option<String>,
    /// Extra instructions forwarded to the remote pipeline.
    pub context: Option<String>,
}

/// Client for the hospitality product categories endpoint.
pub struct HospitalityCategoriesClient {
    transport: Arc<dyn JobTransport>,
}

impl std::fmt::Debug for HospitalityCategoriesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HospitalityCategoriesClient")
            .finish_non_exhaustive()
    }
}

impl HospitalityCategoriesClient {
    pub fn builder() -> HospitalityCategoriesClientBuilder {
        HospitalityCategoriesClientBuilder::new()
    }

    /// Generates a list of suitable categories for a hospitality-type product.
    /// Provide the product name and its parameters to get the best category
    /// matches possible; comes in handy when populating product catalogs or
    /// bulk-processing products.
    ///
    /// Returns the status URL to poll for the finished job.
    pub async fn hospitality_product_categories(
        &self,
        product_name: &str,
        options: &CategoriesOptions,
    ) -> Result<String> {
        let payload = build_payload(product_name, options)?;
        let response = self
            .transport
            .post_json(JobType::HospitalityProductCategories.path(), &payload)
            .await?;
        self.transport.parse_status_url(&response)
    }
}

/// Request payload: mandatory `content`, optional keys only when their value
/// is present and non-empty (zero counts as absent for `max_quantity`).
#[derive(Debug, Serialize)]
struct CategoriesPayload<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "skip_text")]
    city: &'a Option<String>,
    #[serde(skip_serializing_if = "skip_text")]
    country: &'a Option<String>,
    #[serde(skip_serializing_if = "skip_text")]
    language: &'a Option<String>,
    #[serde(skip_serializing_if = "skip_quantity")]
    max_quantity: &'a Option<u32>,
    #[serde(skip_serializing_if = "skip_text")]
    voice_tone: &'a Option<String>,
    #[serde(skip_serializing_if = "skip_text")]
    context: &'a Option<String>,
}

fn skip_text(value: &&Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn skip_quantity(value: &&Option<u32>) -> bool {
    value.map_or(true, |q| q == 0)
}

fn build_payload(product_name: &str, options: &CategoriesOptions) -> Result<serde_json::Value> {
    let payload = CategoriesPayload {
        content: product_name,
        city: &options.city,
        country: &options.country,
        language: &options.language,
        max_quantity: &options.max_quantity,
        voice_tone: &options.voice_tone,
        context: &options.context,
    };
    Ok(serde_json::to_value(payload)?)
}

pub struct HospitalityCategoriesClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: u64,
    transport: Option<Arc<dyn JobTransport>>,
}

impl HospitalityCategoriesClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout_secs: 60,
            transport: None,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Substitute the transport capability (mainly for tests).
    pub fn transport(mut self, transport: Arc<dyn JobTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<HospitalityCategoriesClient> {
        if let Some(transport) = self.transport {
            return Ok(HospitalityCategoriesClient { transport });
        }

        let api_key = self
            .api_key
            .or_else(|| std::env::var("SHARP_API_KEY").ok())
            .ok_or_else(|| Error::configuration("API key required (SHARP_API_KEY)"))?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| "https://sharpapi.com/api/v1".to_string());
        url::Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                "Invalid base URL",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(e.to_string()),
            )
        })?;

        let transport = HttpTransport::new(&api_key, &base_url, self.timeout_secs)?;
        Ok(HospitalityCategoriesClient {
            transport: Arc::new(transport),
        })
    }
}

impl Default for HospitalityCategoriesClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn content_carries_product_name_exactly() {
        let payload = build_payload("Luxury Suite", &CategoriesOptions::default()).unwrap();
        assert_eq!(payload, serde_json::json!({ "content": "Luxury Suite" }));
    }

    #[test]
    fn present_options_appear_under_snake_case_keys() {
        let options = CategoriesOptions {
            city: Some("Paris".into()),
            country: Some("France".into()),
            ..Default::default()
        };
        let payload = build_payload("Luxury Suite", &options).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "content": "Luxury Suite",
                "city": "Paris",
                "country": "France",
            })
        );
    }

    #[test]
    fn falsy_options_are_omitted() {
        let options = CategoriesOptions {
            city: Some(String::new()),
            country: None,
            language: Some("en".into()),
            max_quantity: Some(5),
            voice_tone: Some(String::new()),
            context: None,
        };
        let payload = build_payload("Spa Package", &options).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "content": "Spa Package",
                "language": "en",
                "max_quantity": 5,
            })
        );
    }

    #[test]
    fn zero_max_quantity_is_omitted() {
        let options = CategoriesOptions {
            max_quantity: Some(0),
            ..Default::default()
        };
        let payload = build_payload("Spa Package", &options).unwrap();
        assert_eq!(payload, serde_json::json!({ "content": "Spa Package" }));
    }

    #[test]
    fn all_options_pass_through_unchanged() {
        let options = CategoriesOptions {
            city: Some("Nice".into()),
            country: Some("France".into()),
            language: Some("fr".into()),
            max_quantity: Some(3),
            voice_tone: Some("formal".into()),
            context: Some("beachfront resort".into()),
        };
        let payload = build_payload("Deluxe Room", &options).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "content": "Deluxe Room",
                "city": "Nice",
                "country": "France",
                "language": "fr",
                "max_quantity": 3,
                "voice_tone": "formal",
                "context": "beachfront resort",
            })
        );
    }

    /// Records the dispatched path/body and replies with a canned response.
    struct RecordingTransport {
        seen: Mutex<Vec<(String, serde_json::Value)>>,
        response: serde_json::Value,
    }

    #[async_trait]
    impl JobTransport for RecordingTransport {
        async fn post_json(
            &self,
            path: &str,
            body: &serde_json::Value,
        ) -> Result<serde_json::Value> {
            self.seen
                .lock()
                .unwrap()
                .push((path.to_string(), body.clone()));
            Ok(self.response.clone())
        }
    }

    #[tokio::test]
    async fn dispatches_to_job_type_path_and_returns_status_url() {
        let transport = Arc::new(RecordingTransport {
            seen: Mutex::new(Vec::new()),
            response: serde_json::json!({
                "status_url": "https://sharpapi.com/api/v1/job/status/abc"
            }),
        });
        let client = HospitalityCategoriesClient::builder()
            .transport(transport.clone())
            .build()
            .unwrap();

        let status_url = client
            .hospitality_product_categories(
                "Luxury Suite",
                &CategoriesOptions {
                    city: Some("Paris".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(status_url, "https://sharpapi.com/api/v1/job/status/abc");
        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "/tth/hospitality_product_categories");
        assert_eq!(
            seen[0].1,
            serde_json::json!({ "content": "Luxury Suite", "city": "Paris" })
        );
    }

    #[tokio::test]
    async fn malformed_dispatch_response_surfaces_as_error() {
        let transport = Arc::new(RecordingTransport {
            seen: Mutex::new(Vec::new()),
            response: serde_json::json!({ "job_id": "abc" }),
        });
        let client = HospitalityCategoriesClient::builder()
            .transport(transport)
            .build()
            .unwrap();

        let err = client
            .hospitality_product_categories("Spa Package", &CategoriesOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Response { .. }));
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let err = HospitalityCategoriesClient::builder()
            .api_key("key")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        let context = err.context().expect("configuration error carries context");
        assert_eq!(context.field_path.as_deref(), Some("base_url"));
        assert!(context.details.is_some());
    }
}
