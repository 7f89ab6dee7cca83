//! Gemini `generateContent` client.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::Instrument;

use super::{build_prompt, extract_text, EMPTY_DESCRIPTION, FAILED_DESCRIPTION, MISSING_KEY_DESCRIPTION};
use crate::domain::{Category, EventScoutError, Result};
use crate::GeneratorConfig;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
enum GenerateError {
    #[error("generator unavailable: {0}")]
    Unavailable(String),
    #[error("response has no text")]
    MissingText,
}

/// Description generator backed by the Gemini REST API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    model: String,
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl GeminiClient {
    /// Creates a client from configuration, falling back to the `GEMINI_API_KEY`
    /// and then `API_KEY` environment variables when no key is configured.
    ///
    /// # Errors
    ///
    /// Returns [`EventScoutError::Config`] if the HTTP client cannot be built.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("API_KEY").ok());

        Self::new(config.model.clone(), config.base_url.clone(), api_key)
    }

    /// Creates a client with explicit settings. Blank keys count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`EventScoutError::Config`] if the HTTP client cannot be built.
    pub fn new(model: String, base_url: String, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EventScoutError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            model,
            base_url,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            client,
        })
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generates a short description for an event.
    ///
    /// Always returns displayable text: the placeholder when no key is configured,
    /// the failure fallback when the call fails, and the generic line when the
    /// answer is empty.
    pub async fn generate_description(&self, title: &str, category: Category, location: &str) -> String {
        let Some(api_key) = &self.api_key else {
            tracing::warn!("generator API key is missing, returning placeholder description");
            return MISSING_KEY_DESCRIPTION.to_string();
        };

        let span = tracing::debug_span!("generate_description", model = %self.model, title = %title);
        let result = self
            .request(api_key, &build_prompt(title, category, location))
            .instrument(span)
            .await;

        match result {
            Ok(text) if text.is_empty() => EMPTY_DESCRIPTION.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "error generating description");
                FAILED_DESCRIPTION.to_string()
            }
        }
    }

    async fn request(&self, api_key: &str, prompt: &str) -> std::result::Result<String, GenerateError> {
        let base = self.base_url.trim_end_matches('/');
        let url = format!("{base}/v1beta/models/{}:generateContent", self.model);

        let payload = json!({
            "contents": [
                {
                    "parts": [{ "text": prompt }],
                }
            ],
        });

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| GenerateError::Unavailable(err.to_string()))?;

        let status = response.status();
        let text_body = response
            .text()
            .await
            .map_err(|err| GenerateError::Unavailable(err.to_string()))?;

        if !status.is_success() {
            return Err(GenerateError::Unavailable(format!("HTTP {status}: {text_body}")));
        }

        let value: serde_json::Value = serde_json::from_str(&text_body)
            .map_err(|err| GenerateError::Unavailable(err.to_string()))?;

        extract_text(&value).ok_or(GenerateError::MissingText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves one canned HTTP response on a local port. Returns the base URL and
    /// the raw request that was received.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            let _ = tx.send(request);
        });

        (format!("http://{addr}"), rx)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&buf).into_owned()
    }

    fn client(base_url: &str, api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(
            DEFAULT_MODEL.to_string(),
            base_url.to_string(),
            api_key.map(String::from),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn missing_key_returns_placeholder() {
        // Unroutable base URL: a request would fail rather than return the placeholder.
        let generator = client("http://127.0.0.1:9", None);
        assert!(!generator.has_api_key());

        let text = generator
            .generate_description("Jazz Night", Category::Music, "Blue Note, Bangkok")
            .await;
        assert_eq!(text, MISSING_KEY_DESCRIPTION);
    }

    #[tokio::test]
    async fn blank_key_counts_as_missing() {
        let generator = client("http://127.0.0.1:9", Some("  "));
        let text = generator
            .generate_description("Jazz Night", Category::Music, "Blue Note, Bangkok")
            .await;
        assert_eq!(text, MISSING_KEY_DESCRIPTION);
    }

    #[tokio::test]
    async fn unreachable_endpoint_returns_failure_fallback() {
        let generator = client("http://127.0.0.1:9", Some("test-key"));
        let text = generator
            .generate_description("Jazz Night", Category::Music, "Blue Note, Bangkok")
            .await;
        assert_eq!(text, FAILED_DESCRIPTION);
    }

    #[tokio::test]
    async fn successful_response_returns_generated_text() {
        let (base_url, request) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"  Dance under the full moon.\n"}]}}]}"#,
        )
        .await;

        let text = client(&base_url, Some("test-key"))
            .generate_description("Full Moon Party", Category::Nightlife, "Haad Rin Beach, Koh Phangan")
            .await;
        assert_eq!(text, "Dance under the full moon.");

        let request = request.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-3-flash-preview:generateContent "));
        assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
        assert!(request.contains("titled \\\"Full Moon Party\\\""));
    }

    #[tokio::test]
    async fn blank_response_text_returns_generic_line() {
        let (base_url, _request) =
            serve_once("200 OK", r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#).await;

        let text = client(&base_url, Some("test-key"))
            .generate_description("Jazz Night", Category::Music, "Blue Note, Bangkok")
            .await;
        assert_eq!(text, EMPTY_DESCRIPTION);
    }

    #[tokio::test]
    async fn server_error_returns_failure_fallback() {
        let (base_url, _request) =
            serve_once("500 Internal Server Error", r#"{"error":{"code":500}}"#).await;

        let text = client(&base_url, Some("test-key"))
            .generate_description("Jazz Night", Category::Music, "Blue Note, Bangkok")
            .await;
        assert_eq!(text, FAILED_DESCRIPTION);
    }

    #[tokio::test]
    async fn body_without_candidates_returns_failure_fallback() {
        let (base_url, _request) = serve_once("200 OK", r#"{"promptFeedback":{}}"#).await;

        let text = client(&base_url, Some("test-key"))
            .generate_description("Jazz Night", Category::Music, "Blue Note, Bangkok")
            .await;
        assert_eq!(text, FAILED_DESCRIPTION);
    }

    #[test]
    fn configured_key_wins_over_environment() {
        let config = GeneratorConfig {
            api_key: Some("from-config".to_string()),
            ..GeneratorConfig::default()
        };
        let generator = GeminiClient::from_config(&config).unwrap();
        assert_eq!(generator.api_key.as_deref(), Some("from-config"));
    }
}
