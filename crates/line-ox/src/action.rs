use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Date selection granularity for the datetimepicker action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DatetimepickerMode {
    Date,
    Time,
    Datetime,
}

/// An action bound to a template button or quick-reply item.
///
/// A closed set, tagged by `type` on the wire. Unlike imagemap actions these
/// carry no tappable area; the receiving client renders them as buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Action {
    Postback {
        label: String,
        data: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        display_text: Option<String>,
    },
    Message {
        label: String,
        text: String,
    },
    Uri {
        label: String,
        uri: String,
    },
    Datetimepicker {
        label: String,
        data: String,
        mode: DatetimepickerMode,
        #[serde(skip_serializing_if = "Option::is_none")]
        initial: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<String>,
    },
    Camera {
        label: String,
    },
    CameraRoll {
        label: String,
    },
    Location {
        label: String,
    },
}

impl Action {
    pub fn postback(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self::Postback {
            label: label.into(),
            data: data.into(),
            display_text: None,
        }
    }

    /// Postback that also echoes `display_text` into the chat as a user message.
    pub fn postback_with_display_text(
        label: impl Into<String>,
        data: impl Into<String>,
        display_text: impl Into<String>,
    ) -> Self {
        Self::Postback {
            label: label.into(),
            data: data.into(),
            display_text: Some(display_text.into()),
        }
    }

    pub fn message(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Message {
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn uri(label: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::Uri {
            label: label.into(),
            uri: uri.into(),
        }
    }

    pub fn datetimepicker(
        label: impl Into<String>,
        data: impl Into<String>,
        mode: DatetimepickerMode,
    ) -> Self {
        Self::Datetimepicker {
            label: label.into(),
            data: data.into(),
            mode,
            initial: None,
            max: None,
            min: None,
        }
    }

    pub fn camera(label: impl Into<String>) -> Self {
        Self::Camera {
            label: label.into(),
        }
    }

    pub fn camera_roll(label: impl Into<String>) -> Self {
        Self::CameraRoll {
            label: label.into(),
        }
    }

    pub fn location(label: impl Into<String>) -> Self {
        Self::Location {
            label: label.into(),
        }
    }
}
