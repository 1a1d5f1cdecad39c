//! Google Gemini `generateContent` client used as the sentiment classifier.

use std::time::Duration;

use airpulse_core::DEFAULT_GEMINI_BASE_URL;
use reqwest::{Client, StatusCode, Url};

use crate::classifier::SentimentClassifier;
use crate::error::ClassifierError;
use crate::types::{ErrorEnvelope, GenerateRequest, GenerateResponse};

/// Build the classification prompt for one comment.
#[must_use]
pub fn build_prompt(text: &str) -> String {
    format!(
        "Analyze the sentiment of the following text.\n\
         Classify it as 'positive', 'negative', or 'neutral'.\n\
         Return only one of these three words.\n\
         \n\
         Text: \"{text}\"\n\
         Sentiment:"
    )
}

/// Gemini HTTP client bound to one model.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    model: String,
}

impl GeminiClient {
    /// Creates a client for `model` against the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`ClassifierError::InvalidEndpoint`] if the model name does
    /// not form a valid URL.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, ClassifierError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_GEMINI_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`GeminiClient::new`], plus an invalid `base_url`.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("airpulse/0.1 (mention-sentiment)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |e: &dyn std::fmt::Display| ClassifierError::InvalidEndpoint {
            url: base_url.to_string(),
            reason: e.to_string(),
        };
        let endpoint = Url::parse(&normalised)
            .map_err(|e| invalid(&e))?
            .join(&format!("v1beta/models/{model}:generateContent"))
            .map_err(|e| invalid(&e))?;

        tracing::debug!(model, %endpoint, "gemini client ready");

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
            model: model.to_owned(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` to the model and returns its raw text answer.
    ///
    /// # Errors
    ///
    /// - [`ClassifierError::Http`] on network failure.
    /// - [`ClassifierError::Api`] on a non-2xx status.
    /// - [`ClassifierError::Deserialize`] if the body is not the expected JSON.
    /// - [`ClassifierError::EmptyResponse`] if the model returned no text.
    pub async fn generate(&self, prompt: &str) -> Result<String, ClassifierError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateRequest::new(prompt))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        parsed.into_text().map_err(ClassifierError::EmptyResponse)
    }

    fn api_error(status: StatusCode, body: &str) -> ClassifierError {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|env| match (env.error.status, env.error.message) {
                (Some(code), Some(msg)) => Some(format!("{code}: {msg}")),
                (None, Some(msg)) => Some(msg),
                (Some(code), None) => Some(code),
                (None, None) => None,
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        ClassifierError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl SentimentClassifier for GeminiClient {
    async fn classify(&self, text: &str) -> Result<String, ClassifierError> {
        self.generate(&build_prompt(text)).await
    }
}
