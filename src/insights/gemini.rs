//! Gemini `generateContent` client
//!
//! A single request/response call with no retries. Credentials come from
//! `GEMINI_API_KEY`, or `API_KEY` for older setups.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ReportError;
use crate::config::settings::ReportSettings;

/// Environment variables searched for the API key, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Read the API key from the environment, ignoring blank values
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

/// Client for the Gemini REST API
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client for `model` at `endpoint`
    pub fn new(
        endpoint: &str,
        model: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, ReportError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Create a client from report settings and an API key
    pub fn from_settings(
        settings: &ReportSettings,
        api_key: Option<&str>,
    ) -> Result<Self, ReportError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(ReportError::MissingCredentials)?;

        Self::new(
            &settings.endpoint,
            &settings.model,
            api_key,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` and return the generated text
    pub async fn generate_text(&self, prompt: &str) -> Result<String, ReportError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        debug!(%url, prompt_len = prompt.len(), "requesting report");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ReportError::RequestFailed(format!(
                "Gemini API error {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response.json().await?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(ReportError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::net::SocketAddr;
    use tokio::sync::oneshot;

    /// Mock Gemini server bound to an ephemeral port
    struct MockGemini {
        addr: SocketAddr,
        shutdown_tx: Option<oneshot::Sender<()>>,
    }

    impl MockGemini {
        async fn start(app: Router) -> Self {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

            tokio::spawn(async move {
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        shutdown_rx.await.ok();
                    })
                    .await
                    .unwrap();
            });

            Self {
                addr,
                shutdown_tx: Some(shutdown_tx),
            }
        }

        fn url(&self) -> String {
            format!("http://{}/v1beta", self.addr)
        }
    }

    impl Drop for MockGemini {
        fn drop(&mut self) {
            if let Some(tx) = self.shutdown_tx.take() {
                let _ = tx.send(());
            }
        }
    }

    async fn echo(
        Path(call): Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        let key = headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let prompt = body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap_or("")
            .to_string();

        Json(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": format!("key={} call={}", key, call) },
                        { "text": format!(" prompt={}", prompt) }
                    ]
                }
            }]
        }))
    }

    fn client(endpoint: &str) -> GeminiClient {
        GeminiClient::new(endpoint, "gemini-test", "secret", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_generate_text() {
        let server =
            MockGemini::start(Router::new().route("/v1beta/models/:call", post(echo))).await;

        let text = client(&server.url()).generate_text("hola").await.unwrap();
        assert_eq!(
            text,
            "key=secret call=gemini-test:generateContent prompt=hola"
        );
    }

    #[tokio::test]
    async fn test_empty_candidates() {
        let app = Router::new().route(
            "/v1beta/models/:call",
            post(|| async { Json(json!({ "candidates": [] })) }),
        );
        let server = MockGemini::start(app).await;

        let err = client(&server.url()).generate_text("hola").await.unwrap_err();
        assert!(matches!(err, ReportError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_error_status() {
        let app = Router::new().route(
            "/v1beta/models/:call",
            post(|| async { (StatusCode::FORBIDDEN, "bad key") }),
        );
        let server = MockGemini::start(app).await;

        let err = client(&server.url()).generate_text("hola").await.unwrap_err();
        match err {
            ReportError::RequestFailed(msg) => assert!(msg.contains("403")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Bind and drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr))
            .generate_text("hola")
            .await
            .unwrap_err();
        assert!(matches!(err, ReportError::RequestFailed(_)));
    }

    #[test]
    fn test_from_settings_requires_key() {
        let settings = ReportSettings::default();
        assert!(matches!(
            GeminiClient::from_settings(&settings, None),
            Err(ReportError::MissingCredentials)
        ));
        assert!(matches!(
            GeminiClient::from_settings(&settings, Some("   ")),
            Err(ReportError::MissingCredentials)
        ));

        let client = GeminiClient::from_settings(&settings, Some("k")).unwrap();
        assert_eq!(client.model(), "gemini-2.5-flash");
    }
}
