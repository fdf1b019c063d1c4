use serde::{Deserialize, Serialize};

use crate::{action::Action, error::BuildError};

/// Ordered set of suggested-action buttons attached to a message.
///
/// Item order is on-screen order and is preserved exactly in output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub items: Vec<QuickReplyButton>,
}

impl QuickReply {
    /// At least one item is required.
    pub fn new(items: Vec<QuickReplyButton>) -> Result<Self, BuildError> {
        if items.is_empty() {
            return Err(BuildError::MissingField("items"));
        }
        Ok(Self { items })
    }
}

/// One quick-reply button: a fixed `"action"` wrapper around an [`Action`],
/// with an optional icon shown next to the button label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickReplyButton {
    /// Always `"action"` on the wire.
    pub r#type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    pub action: Action,
}

impl QuickReplyButton {
    pub fn new(action: Action) -> Self {
        Self {
            r#type: "action".to_string(),
            image_url: None,
            action,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

impl From<Action> for QuickReplyButton {
    fn from(action: Action) -> Self {
        QuickReplyButton::new(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn button_wraps_action_under_fixed_tag() {
        let button = QuickReplyButton::new(Action::camera("Camera"));
        assert_eq!(
            serde_json::to_value(&button).unwrap(),
            json!({
                "type": "action",
                "action": {"type": "camera", "label": "Camera"},
            })
        );
    }

    #[test]
    fn empty_item_list_is_rejected() {
        assert_eq!(
            QuickReply::new(Vec::new()),
            Err(BuildError::MissingField("items"))
        );
    }
}
