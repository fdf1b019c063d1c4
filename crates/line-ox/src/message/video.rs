use serde::{Deserialize, Serialize};

use crate::{error, error::BuildError, quick_reply::QuickReply, sender::Sender};

/// Video message: a video URL plus a preview image URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMessage {
    pub original_content_url: String,
    pub preview_image_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReply>,

    #[serde(skip_serializing_if = "Sender::is_omitted")]
    pub sender: Option<Sender>,
}

impl VideoMessage {
    pub fn new(
        original_content_url: impl Into<String>,
        preview_image_url: impl Into<String>,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            original_content_url: error::require("originalContentUrl", original_content_url)?,
            preview_image_url: error::require("previewImageUrl", preview_image_url)?,
            quick_reply: None,
            sender: None,
        })
    }

    pub fn with_quick_reply(mut self, quick_reply: QuickReply) -> Self {
        self.quick_reply = Some(quick_reply);
        self
    }

    pub fn with_sender(mut self, sender: Sender) -> Self {
        self.sender = Some(sender);
        self
    }
}
