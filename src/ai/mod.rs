//! AI generation gateway.
//!
//! Four single-shot request/response operations (generic playground,
//! image generation, audio generation, usage insights) over an external
//! generative model. Every operation validates its input, delegates,
//! normalizes the output into a fixed shape, and converts any upstream
//! failure into an error envelope. No retries, no streaming, no
//! cancellation.

pub mod datauri;
mod flows;
mod gemini;
pub mod wav;

pub use flows::*;
pub use gemini::GeminiClient;

use async_trait::async_trait;

use crate::errors::AppError;

/// Seam to the external generative model. Object-safe so the server can
/// run against the real Gemini client, a disabled stub, or a scripted
/// fake in tests.
#[async_trait]
pub trait GenAi: Send + Sync {
    /// Plain text generation, optionally with an inline file attachment
    /// given as a data URI.
    async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        attachment: Option<&str>,
    ) -> Result<String, AppError>;

    /// Text generation constrained to a JSON object response.
    async fn generate_json(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<serde_json::Value, AppError>;

    /// Image generation. Returns the image as a data URI.
    async fn generate_image(&self, model: &str, prompt: &str) -> Result<String, AppError>;

    /// Speech synthesis. Returns raw PCM samples (mono, 24 kHz, 16-bit).
    async fn generate_speech(
        &self,
        model: &str,
        voice: &str,
        prompt: &str,
    ) -> Result<Vec<u8>, AppError>;
}

/// Gateway used when no API key is configured: every call fails with a
/// uniform, user-presentable error.
pub struct GenAiDisabled;

fn disabled<T>() -> Result<T, AppError> {
    Err(AppError::Generation(
        "AI generation is not configured".to_string(),
    ))
}

#[async_trait]
impl GenAi for GenAiDisabled {
    async fn generate_text(
        &self,
        _model: &str,
        _prompt: &str,
        _attachment: Option<&str>,
    ) -> Result<String, AppError> {
        disabled()
    }

    async fn generate_json(
        &self,
        _model: &str,
        _prompt: &str,
    ) -> Result<serde_json::Value, AppError> {
        disabled()
    }

    async fn generate_image(&self, _model: &str, _prompt: &str) -> Result<String, AppError> {
        disabled()
    }

    async fn generate_speech(
        &self,
        _model: &str,
        _voice: &str,
        _prompt: &str,
    ) -> Result<Vec<u8>, AppError> {
        disabled()
    }
}
