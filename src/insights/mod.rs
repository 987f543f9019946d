//! Monthly report generation
//!
//! Sends the month's expenses to a text-generation API and returns its
//! prose. Any failure is turned into a fixed fallback message, so callers
//! always get text back.

pub mod gemini;
pub mod prompt;

pub use gemini::{api_key_from_env, GeminiClient};
pub use prompt::{build_prompt, ReportRequest};

use thiserror::Error;
use tracing::warn;

use crate::config::settings::ReportSettings;

/// Why a report could not be generated
#[derive(Error, Debug)]
pub enum ReportError {
    /// No API key is configured
    #[error("Report API key is not configured")]
    MissingCredentials,

    /// The service could not be reached or answered with an error
    #[error("Report request failed: {0}")]
    RequestFailed(String),

    /// The service answered without any text
    #[error("Report service returned no text")]
    EmptyResponse,
}

impl ReportError {
    /// Message shown in place of the report
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::MissingCredentials => {
                "API Key no configurada. Por favor configura tu clave de API de Gemini."
            }
            Self::RequestFailed(_) => {
                "Ocurrió un error al conectar con Gemini para generar el reporte. Inténtalo más tarde."
            }
            Self::EmptyResponse => "No se pudo generar el reporte.",
        }
    }
}

impl From<reqwest::Error> for ReportError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err.to_string())
    }
}

/// Generate the report text
pub async fn request_report(
    settings: &ReportSettings,
    api_key: Option<&str>,
    request: &ReportRequest,
    currency_symbol: &str,
) -> Result<String, ReportError> {
    let client = GeminiClient::from_settings(settings, api_key)?;
    let prompt = build_prompt(request, currency_symbol);
    client.generate_text(&prompt).await
}

/// Generate the report text, or the fallback message on any failure
pub async fn generate_or_fallback(
    settings: &ReportSettings,
    api_key: Option<&str>,
    request: &ReportRequest,
    currency_symbol: &str,
) -> String {
    match request_report(settings, api_key, request, currency_symbol).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "report generation failed");
            e.fallback_message().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn request() -> ReportRequest {
        ReportRequest {
            expenses: Vec::new(),
            period_label: "junio de 2024".into(),
            total: Money::zero(),
        }
    }

    #[tokio::test]
    async fn test_missing_key_falls_back() {
        let text = generate_or_fallback(&ReportSettings::default(), None, &request(), "$").await;
        assert_eq!(text, ReportError::MissingCredentials.fallback_message());
    }

    #[tokio::test]
    async fn test_unreachable_falls_back() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let settings = ReportSettings {
            endpoint: format!("http://{}", addr),
            timeout_secs: 5,
            ..ReportSettings::default()
        };
        let text = generate_or_fallback(&settings, Some("key"), &request(), "$").await;
        assert_eq!(
            text,
            ReportError::RequestFailed(String::new()).fallback_message()
        );
    }

    #[test]
    fn test_fallback_messages_are_distinct() {
        let missing = ReportError::MissingCredentials.fallback_message();
        let failed = ReportError::RequestFailed("x".into()).fallback_message();
        let empty = ReportError::EmptyResponse.fallback_message();
        assert_ne!(missing, failed);
        assert_ne!(failed, empty);
    }
}
