//! Gemini REST client for text generation (`generateContent`) and image
//! generation (Imagen `predict`).

use async_trait::async_trait;
use base64::Engine;
use serde_json::json;

use super::{ImageModel, TextModel};
use crate::config::GeminiConfig;
use crate::errors::{GenerateError, GenerateResult};

/// Fixed sampling temperature for recipe text. Non-zero so the same
/// ingredients can yield different recipes across submissions.
const TEMPERATURE: f64 = 0.7;

/// Client for both generative endpoints, built from an explicit
/// [`GeminiConfig`] rather than process-wide state.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> GenerateResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// POST a JSON body to `{api_base}/v1beta/models/{model}:{verb}` and
    /// return the response envelope, mapping non-2xx statuses to
    /// [`GenerateError::Api`].
    async fn call(
        &self,
        model: &str,
        verb: &str,
        body: serde_json::Value,
    ) -> GenerateResult<serde_json::Value> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerateError::MissingApiKey)?;

        let url = format!("{}/v1beta/models/{}:{}", self.config.api_base, model, verb);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            // The error body usually carries {"error": {"message": ...}};
            // fall back to the whole body if it doesn't.
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.pointer("/error/message")
                        .and_then(|m| m.as_str())
                        .map(str::to_owned)
                })
                .unwrap_or(body);
            tracing::error!(status, model, %message, "generative API call failed");
            return Err(GenerateError::Api { status, message });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(status, model, error = %e, "response envelope was not JSON");
            GenerateError::Api {
                status,
                message: "response envelope was not valid JSON".to_string(),
            }
        })
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> GenerateResult<String> {
        tracing::debug!(model = %self.config.text_model, "calling text endpoint");
        let envelope = self
            .call(
                &self.config.text_model,
                "generateContent",
                json!({
                    "contents": [{ "parts": [{ "text": prompt }] }],
                    "generationConfig": {
                        "responseMimeType": "application/json",
                        "temperature": TEMPERATURE,
                    },
                }),
            )
            .await?;

        envelope
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|t| t.as_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                tracing::error!(%envelope, "text endpoint returned no candidate text");
                GenerateError::Api {
                    status: 200,
                    message: "response contained no candidate text".to_string(),
                }
            })
    }
}

#[async_trait]
impl ImageModel for GeminiClient {
    async fn generate_image(&self, prompt: &str) -> GenerateResult<Vec<u8>> {
        tracing::debug!(model = %self.config.image_model, "calling image endpoint");
        let envelope = self
            .call(
                &self.config.image_model,
                "predict",
                json!({
                    "instances": [{ "prompt": prompt }],
                    "parameters": {
                        "sampleCount": 1,
                        "outputMimeType": "image/jpeg",
                    },
                }),
            )
            .await?;

        let encoded = envelope
            .pointer("/predictions/0/bytesBase64Encoded")
            .and_then(|b| b.as_str())
            .ok_or(GenerateError::NoImageData)?;

        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| {
                tracing::error!(error = %e, "image payload was not valid base64");
                GenerateError::NoImageData
            })
    }
}
