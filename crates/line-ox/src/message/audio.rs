use serde::{Deserialize, Serialize};

use crate::{error, error::BuildError, quick_reply::QuickReply, sender::Sender};

/// Audio message: a content URL plus the playback length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioMessage {
    pub original_content_url: String,

    /// Playback length in milliseconds; a JSON number on the wire.
    pub duration: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReply>,

    #[serde(skip_serializing_if = "Sender::is_omitted")]
    pub sender: Option<Sender>,
}

impl AudioMessage {
    pub fn new(
        original_content_url: impl Into<String>,
        duration: u64,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            original_content_url: error::require("originalContentUrl", original_content_url)?,
            duration,
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
