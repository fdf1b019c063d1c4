use serde::{Deserialize, Serialize};

use crate::{error, error::BuildError, quick_reply::QuickReply, sender::Sender};

/// Pixel rectangle of a tappable region on the imagemap canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Area {
    /// Width and height must be at least one pixel.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Result<Self, BuildError> {
        if width == 0 {
            return Err(BuildError::invalid("area.width", "must be at least 1 pixel"));
        }
        if height == 0 {
            return Err(BuildError::invalid("area.height", "must be at least 1 pixel"));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

/// Dimensions of the imagemap canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSize {
    pub width: u32,
    pub height: u32,
}

impl BaseSize {
    pub fn new(width: u32, height: u32) -> Result<Self, BuildError> {
        if width == 0 {
            return Err(BuildError::invalid(
                "baseSize.width",
                "must be at least 1 pixel",
            ));
        }
        if height == 0 {
            return Err(BuildError::invalid(
                "baseSize.height",
                "must be at least 1 pixel",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Action bound to a tappable region of an imagemap.
///
/// Unlike [`Action`](crate::action::Action), every imagemap action carries
/// the rectangle it responds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ImagemapAction {
    Uri { link_uri: String, area: Area },
    Message { text: String, area: Area },
}

impl ImagemapAction {
    pub fn uri(link_uri: impl Into<String>, area: Area) -> Self {
        Self::Uri {
            link_uri: link_uri.into(),
            area,
        }
    }

    pub fn message(text: impl Into<String>, area: Area) -> Self {
        Self::Message {
            text: text.into(),
            area,
        }
    }
}

/// Imagemap message: an image overlaid with tappable regions.
///
/// Action order is preserved exactly in output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagemapMessage {
    pub base_url: String,
    pub alt_text: String,
    pub base_size: BaseSize,
    pub actions: Vec<ImagemapAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReply>,

    #[serde(skip_serializing_if = "Sender::is_omitted")]
    pub sender: Option<Sender>,
}

impl ImagemapMessage {
    /// At least one action is required.
    pub fn new(
        base_url: impl Into<String>,
        alt_text: impl Into<String>,
        base_size: BaseSize,
        actions: Vec<ImagemapAction>,
    ) -> Result<Self, BuildError> {
        if actions.is_empty() {
            return Err(BuildError::MissingField("actions"));
        }
        Ok(Self {
            base_url: error::require("baseUrl", base_url)?,
            alt_text: error::require("altText", alt_text)?,
            base_size,
            actions,
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
