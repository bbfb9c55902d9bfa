//! AI generation endpoints.
//!
//! Thin HTTP bindings over the gateway flows, plus the per-tool
//! playground endpoint that dispatches on the tool's category and
//! returns a tagged chat message.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::ai::{
    self, AudioInput, AudioOutput, ImageInput, ImageOutput, InsightsInput, InsightsOutput,
    PlaygroundInput, PlaygroundOutput,
};
use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::{ChatMessage, MessageContent, ToolCategory, ToolType};
use crate::policy;
use crate::AppState;

/// POST /api/ai/playground - Generic text playground.
pub async fn playground(
    State(state): State<AppState>,
    Json(input): Json<PlaygroundInput>,
) -> ApiResult<PlaygroundOutput> {
    success(ai::run_generic_playground(state.genai.as_ref(), input).await?)
}

/// POST /api/ai/image - Image generation.
pub async fn image(
    State(state): State<AppState>,
    Json(input): Json<ImageInput>,
) -> ApiResult<ImageOutput> {
    success(ai::generate_image(state.genai.as_ref(), input).await?)
}

/// POST /api/ai/audio - Speech synthesis.
pub async fn audio(
    State(state): State<AppState>,
    Json(input): Json<AudioInput>,
) -> ApiResult<AudioOutput> {
    success(ai::generate_audio(state.genai.as_ref(), input).await?)
}

/// POST /api/ai/insights - Usage insight summarization (admin section).
pub async fn insights(
    State(state): State<AppState>,
    Json(input): Json<InsightsInput>,
) -> ApiResult<InsightsOutput> {
    success(ai::generate_usage_insights(state.genai.as_ref(), input).await?)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolPlaygroundRequest {
    pub prompt: String,
    #[serde(default)]
    pub file_data_uri: Option<String>,
}

/// POST /api/tools/:id/playground - One playground turn against an
/// API-integrated tool. Dispatches on the tool's category and returns
/// the matching message content variant.
pub async fn tool_playground(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(request): Json<ToolPlaygroundRequest>,
) -> ApiResult<ChatMessage> {
    let tool = state
        .store
        .get_tool(&id)
        .filter(|t| policy::is_visible(&user, t))
        .ok_or_else(|| AppError::NotFound(format!("Tool {} not found", id)))?;

    if tool.tool_type == ToolType::WebBased {
        return Err(AppError::Validation(
            "This tool is web-based and does not have an integrated playground".to_string(),
        ));
    }
    if !policy::can_launch(&tool) {
        return Err(AppError::Forbidden(format!(
            "{} is currently inactive",
            tool.name
        )));
    }

    let genai = state.genai.as_ref();
    let content = match tool.category {
        ToolCategory::Text => {
            let output = ai::run_generic_playground(
                genai,
                PlaygroundInput {
                    prompt: request.prompt,
                    tool_name: tool.name.clone(),
                    file_data_uri: request.file_data_uri,
                },
            )
            .await?;
            MessageContent::Text {
                text: output.response,
            }
        }
        ToolCategory::Image => {
            let output = ai::generate_image(
                genai,
                ImageInput {
                    prompt: request.prompt,
                },
            )
            .await?;
            MessageContent::Image {
                image_url: output.image_url,
            }
        }
        ToolCategory::Audio => {
            let output = ai::generate_audio(
                genai,
                AudioInput {
                    prompt: request.prompt,
                },
            )
            .await?;
            MessageContent::Audio {
                audio_url: output.audio_url,
            }
        }
        // Unreachable for a catalog honoring the category/type
        // invariant; reject rather than panic if it is violated.
        ToolCategory::WebBased => {
            return Err(AppError::Validation(
                "This tool does not have an integrated playground".to_string(),
            ))
        }
    };

    success(ChatMessage::assistant(content))
}
