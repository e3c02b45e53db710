use std::sync::OnceLock;
use std::time::Duration;

use reqwest::multipart::Part;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use super::url::compose;

pub fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .use_rustls_tls()
        .build()
        .expect("Failed to build HTTP client")
}

/// A client pre-bound to the API base URL. Cheap to clone; the base
/// configuration is immutable after construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Build a client with the base URL resolved from the environment.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::from_env())
    }

    /// Build a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            client: build_client(),
            config,
        }
    }

    /// The process-wide shared client. Configuration is resolved once, on
    /// first access; every caller gets the same instance.
    pub fn shared() -> &'static ApiClient {
        static SHARED: OnceLock<ApiClient> = OnceLock::new();
        SHARED.get_or_init(ApiClient::new)
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Start a request for `path` under the configured base URL.
    /// An absolute `path` bypasses the base entirely.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = Url::parse(&compose(&self.config.base_url, path))?;
        tracing::debug!(%method, %url, "sending API request");
        Ok(self.client.request(method, url))
    }

    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = check_status(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub(crate) async fn execute_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        check_status(builder.send().await?).await?;
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Multipart file part with the MIME type guessed from the file name.
pub(crate) fn file_part(file_name: &str, bytes: Vec<u8>) -> Result<Part, ApiError> {
    let mime = mime_guess::from_path(file_name).first_or(mime::APPLICATION_OCTET_STREAM);
    let part = Part::bytes(bytes)
        .file_name(file_name.to_string())
        .mime_str(mime.as_ref())?;
    Ok(part)
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let detail = error_detail(&body);
    tracing::warn!(status = status.as_u16(), %detail, "API request failed");
    Err(ApiError::Status {
        status: status.as_u16(),
        detail,
    })
}

/// Pull a human-readable message out of an API error body.
/// The backend answers with `{"detail": …}` or `{"error": …}`; anything
/// else is passed through as-is.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("detail")
            .or_else(|| value.get("error"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_is_one_instance() {
        assert!(std::ptr::eq(ApiClient::shared(), ApiClient::shared()));
    }

    #[test]
    fn test_explicit_config_used_verbatim() {
        let client = ApiClient::with_config(ClientConfig {
            base_url: "https://api.example.com/v2/".to_string(),
        });
        assert_eq!(client.base_url(), "https://api.example.com/v2/");
    }

    #[test]
    fn test_error_detail_drf_shapes() {
        assert_eq!(error_detail(r#"{"detail": "Not found."}"#), "Not found.");
        assert_eq!(
            error_detail(r#"{"error": "Description and marking scheme are required."}"#),
            "Description and marking scheme are required."
        );
    }

    #[test]
    fn test_error_detail_passthrough() {
        assert_eq!(error_detail("<html>502</html>"), "<html>502</html>");
        // Unrecognized JSON shapes keep their serialized form
        assert_eq!(
            error_detail(r#"{"test": "This field is required."}"#),
            r#"{"test":"This field is required."}"#
        );
    }
}
