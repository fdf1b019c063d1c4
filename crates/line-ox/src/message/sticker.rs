use serde::{Deserialize, Serialize};

use crate::{error, error::BuildError, quick_reply::QuickReply, sender::Sender};

/// Sticker message, identified by package and sticker IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerMessage {
    pub package_id: String,
    pub sticker_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReply>,

    #[serde(skip_serializing_if = "Sender::is_omitted")]
    pub sender: Option<Sender>,
}

impl StickerMessage {
    pub fn new(
        package_id: impl Into<String>,
        sticker_id: impl Into<String>,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            package_id: error::require("packageId", package_id)?,
            sticker_id: error::require("stickerId", sticker_id)?,
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
