//! HTTP client for the drafting assistant service.
//!
//! The service exposes two JSON endpoints, one per call shape:
//!
//! - `POST /v1/assist/discussion-suggestion`
//! - `POST /v1/assist/agenda-draft`
//!
//! Response parsing is lenient: the service evolves independently, so
//! missing optional fields fall back to defaults instead of failing the
//! whole call.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AgendaItemDraft, AssistantError, DiscussionSuggestion, DiscussionSuggestionRequest,
    DraftImprovementRequest, TextAssistant,
};

/// Configuration for the drafting service client.
#[derive(Debug, Clone)]
pub struct DraftingServiceConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL of the service.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl DraftingServiceConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://assist.protokollant.example".to_string(),
            timeout: Duration::from_secs(20),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// HTTP implementation of the [`TextAssistant`] port.
pub struct HttpTextAssistant {
    config: DraftingServiceConfig,
    client: Client,
}

impl HttpTextAssistant {
    /// Creates a new client with the given configuration.
    pub fn new(config: DraftingServiceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn suggestion_url(&self) -> String {
        format!("{}/v1/assist/discussion-suggestion", self.config.base_url)
    }

    fn draft_url(&self) -> String {
        format!("{}/v1/assist/agenda-draft", self.config.base_url)
    }

    async fn post<B: Serialize>(&self, url: String, body: &B) -> Result<Response, AssistantError> {
        self.client
            .post(url)
            .bearer_auth(self.config.api_key())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AssistantError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    AssistantError::Network(format!("Connection failed: {}", e))
                } else {
                    AssistantError::Network(e.to_string())
                }
            })
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, AssistantError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(AssistantError::AuthenticationFailed),
            400 => Err(AssistantError::InvalidRequest(error_body)),
            500..=599 => Err(AssistantError::Unavailable {
                message: format!("Server error {}: {}", status, error_body),
            }),
            _ => Err(AssistantError::Network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }
}

#[async_trait]
impl TextAssistant for HttpTextAssistant {
    async fn suggest_discussion(
        &self,
        request: &DiscussionSuggestionRequest,
    ) -> Result<DiscussionSuggestion, AssistantError> {
        let body = SuggestionWireRequest {
            keywords: &request.keywords,
            context: &request.context,
            existing_discussion: request.existing_discussion.as_deref(),
        };

        let response = self.post(self.suggestion_url(), &body).await?;
        let response = self.handle_response_status(response).await?;

        let wire: SuggestionWireResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Parse(format!("Failed to parse response: {}", e)))?;

        let suggested_text = wire
            .suggested_text
            .ok_or_else(|| AssistantError::Parse("Response carried no suggestion".to_string()))?;

        Ok(DiscussionSuggestion { suggested_text })
    }

    async fn improve_agenda_item(
        &self,
        request: &DraftImprovementRequest,
    ) -> Result<AgendaItemDraft, AssistantError> {
        let response = self.post(self.draft_url(), request).await?;
        let response = self.handle_response_status(response).await?;

        let wire: DraftWireResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Parse(format!("Failed to parse response: {}", e)))?;

        Ok(AgendaItemDraft {
            improved_title: wire.improved_title.unwrap_or_else(|| request.title.clone()),
            improved_description: wire
                .improved_description
                .unwrap_or_else(|| request.description.clone()),
            legal_notes: wire.legal_notes,
            vote_required: wire.vote_required.unwrap_or(false),
        })
    }
}

// ----- Wire types -----

#[derive(Debug, Serialize)]
struct SuggestionWireRequest<'a> {
    keywords: &'a str,
    context: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    existing_discussion: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SuggestionWireResponse {
    suggested_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DraftWireResponse {
    improved_title: Option<String>,
    improved_description: Option<String>,
    legal_notes: Option<String>,
    vote_required: Option<bool>,
}
