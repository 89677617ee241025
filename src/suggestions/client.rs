// src/suggestions/client.rs

use crate::suggestions::models::{
    Content, DescriptionRequest, DescriptionSuggestion, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, Part, PickupTimeRequest, PickupTimeSuggestion,
};
use crate::suggestions::prompts::{description_prompt, pickup_time_prompt};
use crate::suggestions::{SuggestionError, SuggestionService};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` leaves the client unconfigured; every call then fails fast.
    pub api_key: Option<String>,
    pub model: String,
    /// Example: "https://generativelanguage.googleapis.com"
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Blocking client for the Generative Language `generateContent` endpoint.
pub struct GeminiClient {
    cfg: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(cfg: GeminiConfig) -> Result<Self, SuggestionError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| SuggestionError::Request(e.to_string()))?;

        Ok(Self { cfg, client })
    }

    pub fn is_configured(&self) -> bool {
        self.cfg.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.cfg.api_base.trim_end_matches('/'),
            self.cfg.model
        )
    }

    fn generate<T: DeserializeOwned>(&self, prompt: &str) -> Result<T, SuggestionError> {
        let api_key = self
            .cfg
            .api_key
            .as_deref()
            .ok_or(SuggestionError::NotConfigured)?;

        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| SuggestionError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(SuggestionError::Api { status, body });
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .map_err(|e| SuggestionError::Parse(e.to_string()))?;

        parse_candidate(&parsed)
    }
}

impl SuggestionService for GeminiClient {
    fn suggest_description(
        &self,
        req: &DescriptionRequest,
    ) -> Result<DescriptionSuggestion, SuggestionError> {
        self.generate(&description_prompt(req))
    }

    fn suggest_pickup_time(
        &self,
        req: &PickupTimeRequest,
    ) -> Result<PickupTimeSuggestion, SuggestionError> {
        self.generate(&pickup_time_prompt(req))
    }
}

/// Decodes the first candidate's text as `T`. Tolerates a ```json fence.
pub fn parse_candidate<T: DeserializeOwned>(
    resp: &GenerateContentResponse,
) -> Result<T, SuggestionError> {
    let text = resp
        .first_text()
        .ok_or_else(|| SuggestionError::Parse("response had no candidate text".into()))?;

    let trimmed = text.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(json).map_err(|e| SuggestionError::Parse(e.to_string()))
}
