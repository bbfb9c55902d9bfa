//! Gemini REST client.
//!
//! Thin `generateContent` wrapper: one POST per call, API key in the
//! query string, 30 second request timeout. Upstream failures of any
//! kind (transport, non-2xx status, missing media in the response) are
//! logged and converted into a single gateway error class.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::{datauri, GenAi};
use crate::errors::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, AppError> {
        let response = self
            .client
            .post(self.endpoint(model))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model, error = %e, "Gemini request failed");
                AppError::Generation(format!("Generation request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(model, %status, body, "Gemini returned an error status");
            return Err(AppError::Generation(format!(
                "Generation failed with status {}",
                status
            )));
        }

        response.json::<GenerateResponse>().await.map_err(|e| {
            tracing::error!(model, error = %e, "Gemini response decode failed");
            AppError::Generation(format!("Generation response decode failed: {}", e))
        })
    }
}

#[async_trait]
impl GenAi for GeminiClient {
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        attachment: Option<&str>,
    ) -> Result<String, AppError> {
        let mut parts = vec![Part::text(prompt)];
        if let Some(uri) = attachment {
            let (mime, data) = datauri::parse(uri)?;
            parts.push(Part::inline_data(mime, data));
        }

        let request = GenerateRequest {
            contents: vec![Content::user(parts)],
            generation_config: None,
        };
        let response = self.generate(model, &request).await?;
        response
            .first_text()
            .ok_or_else(|| AppError::Generation("Model produced no text".to_string()))
    }

    async fn generate_json(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<serde_json::Value, AppError> {
        let request = GenerateRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_modalities: None,
                speech_config: None,
            }),
        };
        let response = self.generate(model, &request).await?;
        let text = response
            .first_text()
            .ok_or_else(|| AppError::Generation("Model produced no text".to_string()))?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(model, error = %e, "Model JSON output did not parse");
            AppError::Generation("Model produced malformed JSON".to_string())
        })
    }

    async fn generate_image(&self, model: &str, prompt: &str) -> Result<String, AppError> {
        let request = GenerateRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            generation_config: Some(GenerationConfig {
                response_mime_type: None,
                response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
                speech_config: None,
            }),
        };
        let response = self.generate(model, &request).await?;
        let media = response
            .first_inline_data()
            .ok_or_else(|| {
                AppError::Generation("Image generation failed to produce an image".to_string())
            })?;
        // The payload arrives base64-encoded; pass it through unchanged.
        Ok(format!("data:{};base64,{}", media.mime_type, media.data))
    }

    async fn generate_speech(
        &self,
        model: &str,
        voice: &str,
        prompt: &str,
    ) -> Result<Vec<u8>, AppError> {
        let request = GenerateRequest {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            generation_config: Some(GenerationConfig {
                response_mime_type: None,
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice.to_string(),
                        },
                    },
                }),
            }),
        };
        let response = self.generate(model, &request).await?;
        let media = response
            .first_inline_data()
            .ok_or_else(|| {
                AppError::Generation("Audio generation failed to produce an audio".to_string())
            })?;
        STANDARD.decode(&media.data).map_err(|e| {
            tracing::error!(model, error = %e, "Audio payload decode failed");
            AppError::Generation("Audio payload was not valid base64".to_string())
        })
    }
}

// ==================== WIRE TYPES ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }

    fn inline_data(mime_type: String, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData { mime_type, data }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speech_config: Option<SpeechConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
    }

    fn first_text(&self) -> Option<String> {
        self.parts().find_map(|p| p.text.clone())
    }

    fn first_inline_data(&self) -> Option<InlineData> {
        self.parts().find_map(|p| p.inline_data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_format() {
        let client = GeminiClient::new(
            "test-key".to_string(),
            "https://example.test/".to_string(),
        )
        .unwrap();
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn test_response_extraction() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "hello" },
                        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
                    ]
                }
            }]
        });
        let response: GenerateResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("hello"));
        assert_eq!(response.first_inline_data().unwrap().mime_type, "image/png");
    }

    #[test]
    fn test_empty_response() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.first_text().is_none());
        assert!(response.first_inline_data().is_none());
    }
}
