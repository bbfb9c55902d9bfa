//! Chat message types for the tool playground.
//!
//! Message content is a tagged union with one case per content kind
//! rather than a shape-sniffed object: plain text, an image reference,
//! an audio reference, or a prompt with a file attachment.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A file attached to a prompt, carried as a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAttachment {
    pub name: String,
    pub data_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MessageContent {
    Text {
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        image_url: String,
    },
    #[serde(rename_all = "camelCase")]
    Audio {
        audio_url: String,
    },
    File {
        prompt: String,
        file: FileAttachment,
    },
}

/// One turn of a playground conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn assistant(content: MessageContent) -> Self {
        Self {
            role: MessageRole::Assistant,
            content,
        }
    }
}
