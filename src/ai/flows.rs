//! The four gateway operations and their fixed contracts.

use serde::{Deserialize, Serialize};

use super::{datauri, wav, GenAi};
use crate::errors::AppError;

/// Model for text interactions.
pub const TEXT_MODEL: &str = "gemini-2.5-flash";
/// Model for image generation.
pub const IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
/// Model for speech synthesis.
pub const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
/// Prebuilt voice used for all synthesized speech.
pub const TTS_VOICE: &str = "Algenib";

// ==================== GENERIC PLAYGROUND ====================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundInput {
    pub prompt: String,
    pub tool_name: String,
    #[serde(default)]
    pub file_data_uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaygroundOutput {
    pub response: String,
}

/// Run a prompt through the generic text playground, framed as the
/// named tool.
pub async fn run_generic_playground(
    genai: &dyn GenAi,
    input: PlaygroundInput,
) -> Result<PlaygroundOutput, AppError> {
    if input.prompt.trim().is_empty() {
        return Err(AppError::Validation("Prompt is required".to_string()));
    }
    if input.tool_name.trim().is_empty() {
        return Err(AppError::Validation("Tool name is required".to_string()));
    }
    if let Some(uri) = &input.file_data_uri {
        datauri::parse(uri)?;
    }

    let mut prompt = format!(
        "You are acting as the AI model for the tool: '{}'.\n\n",
        input.tool_name
    );
    if input.tool_name == "Document Generator" {
        prompt.push_str(
            "Please provide a well-structured response using Markdown for formatting \
             (e.g., headings, lists, bold text).\n\n",
        );
    }
    prompt.push_str("Respond to the user's prompt naturally, as if you are that tool.\n\n");
    prompt.push_str("User prompt:\n");
    prompt.push_str(&input.prompt);
    if input.file_data_uri.is_some() {
        prompt.push_str(
            "\n\nThe user has also provided a file for context. \
             Analyze it as part of their request.",
        );
    }

    let response = genai
        .generate_text(TEXT_MODEL, &prompt, input.file_data_uri.as_deref())
        .await?;
    Ok(PlaygroundOutput { response })
}

// ==================== IMAGE GENERATION ====================

#[derive(Debug, Clone, Deserialize)]
pub struct ImageInput {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOutput {
    /// Generated image as a data URI.
    pub image_url: String,
}

pub async fn generate_image(genai: &dyn GenAi, input: ImageInput) -> Result<ImageOutput, AppError> {
    if input.prompt.trim().is_empty() {
        return Err(AppError::Validation("Prompt is required".to_string()));
    }
    let image_url = genai.generate_image(IMAGE_MODEL, &input.prompt).await?;
    Ok(ImageOutput { image_url })
}

// ==================== AUDIO GENERATION ====================

#[derive(Debug, Clone, Deserialize)]
pub struct AudioInput {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioOutput {
    /// WAV-encoded audio (mono, 24 kHz, 16-bit) as a data URI.
    pub audio_url: String,
}

/// Synthesize speech and re-encode the raw PCM into a playable WAV
/// container.
pub async fn generate_audio(genai: &dyn GenAi, input: AudioInput) -> Result<AudioOutput, AppError> {
    if input.prompt.trim().is_empty() {
        return Err(AppError::Validation("Prompt is required".to_string()));
    }
    let pcm = genai
        .generate_speech(TTS_MODEL, TTS_VOICE, &input.prompt)
        .await?;
    let audio_url = datauri::build("audio/wav", &wav::pcm_to_wav_default(&pcm));
    Ok(AudioOutput { audio_url })
}

// ==================== USAGE INSIGHTS ====================

#[derive(Debug, Clone, Deserialize)]
pub struct InsightsInput {
    /// The tool usage logs in JSON format.
    pub logs: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsOutput {
    pub insights: String,
    pub recommendations: String,
}

/// Analyze usage logs and produce natural-language insights and
/// recommendations.
pub async fn generate_usage_insights(
    genai: &dyn GenAi,
    input: InsightsInput,
) -> Result<InsightsOutput, AppError> {
    if input.logs.trim().is_empty() {
        return Err(AppError::Validation("Logs are required".to_string()));
    }

    let prompt = format!(
        "You are an AI assistant that analyzes tool usage logs and provides insights and \
         recommendations to the administrator.\n\n\
         Analyze the following tool usage logs:\n{}\n\n\
         Provide insights on which tools are most and least used, and identify usage patterns \
         within departments. Based on these insights, give recommendations about tool \
         assignments and resource allocation.\n\n\
         Respond with a JSON object of the form:\n\
         {{\n  \"insights\": \"...\",\n  \"recommendations\": \"...\"\n}}",
        input.logs
    );

    let value = genai.generate_json(TEXT_MODEL, &prompt).await?;
    let insights = value
        .get("insights")
        .and_then(|v| v.as_str())
        .ok_or_else(|| AppError::Generation("Model response missing insights".to_string()))?;
    let recommendations = value
        .get("recommendations")
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            AppError::Generation("Model response missing recommendations".to_string())
        })?;

    Ok(InsightsOutput {
        insights: insights.to_string(),
        recommendations: recommendations.to_string(),
    })
}
