use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{action::Action, error, error::BuildError, quick_reply::QuickReply, sender::Sender};

/// Aspect ratio of template thumbnail images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageAspectRatio {
    Rectangle,
    Square,
}

/// Fit mode of template thumbnail images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageSize {
    Cover,
    Contain,
}

/// Provider-defined template layout nested under a template message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Template {
    Buttons(ButtonsTemplate),
    Confirm(ConfirmTemplate),
    Carousel(CarouselTemplate),
    ImageCarousel(ImageCarouselTemplate),
}

impl From<ButtonsTemplate> for Template {
    fn from(template: ButtonsTemplate) -> Self {
        Template::Buttons(template)
    }
}

impl From<ConfirmTemplate> for Template {
    fn from(template: ConfirmTemplate) -> Self {
        Template::Confirm(template)
    }
}

impl From<CarouselTemplate> for Template {
    fn from(template: CarouselTemplate) -> Self {
        Template::Carousel(template)
    }
}

impl From<ImageCarouselTemplate> for Template {
    fn from(template: ImageCarouselTemplate) -> Self {
        Template::ImageCarousel(template)
    }
}

/// Buttons layout: an optional thumbnail and title above a text body and
/// up to a handful of action buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonsTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_aspect_ratio: Option<ImageAspectRatio>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,

    /// Hex color, e.g. `#FFFFFF`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub text: String,

    /// Action triggered by tapping the template body outside any button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<Action>,

    pub actions: Vec<Action>,
}

impl ButtonsTemplate {
    pub fn new(text: impl Into<String>, actions: Vec<Action>) -> Result<Self, BuildError> {
        if actions.is_empty() {
            return Err(BuildError::MissingField("actions"));
        }
        Ok(Self {
            thumbnail_image_url: None,
            image_aspect_ratio: None,
            image_size: None,
            image_background_color: None,
            title: None,
            text: error::require("text", text)?,
            default_action: None,
            actions,
        })
    }

    pub fn with_thumbnail_image_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_image_url = Some(url.into());
        self
    }

    pub fn with_image_aspect_ratio(mut self, ratio: ImageAspectRatio) -> Self {
        self.image_aspect_ratio = Some(ratio);
        self
    }

    pub fn with_image_size(mut self, size: ImageSize) -> Self {
        self.image_size = Some(size);
        self
    }

    pub fn with_image_background_color(mut self, color: impl Into<String>) -> Self {
        self.image_background_color = Some(color.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_default_action(mut self, action: Action) -> Self {
        self.default_action = Some(action);
        self
    }
}

/// Confirm layout: a text body with exactly two action buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmTemplate {
    pub text: String,
    pub actions: Vec<Action>,
}

impl ConfirmTemplate {
    pub fn new(text: impl Into<String>, actions: Vec<Action>) -> Result<Self, BuildError> {
        match actions.len() {
            0 | 1 => return Err(BuildError::MissingField("actions")),
            2 => {}
            n => {
                return Err(BuildError::invalid(
                    "actions",
                    format!("confirm template takes exactly 2 actions, got {n}"),
                ));
            }
        }
        Ok(Self {
            text: error::require("text", text)?,
            actions,
        })
    }
}

/// Carousel layout: a horizontally scrollable sequence of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselTemplate {
    pub columns: Vec<CarouselColumn>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_aspect_ratio: Option<ImageAspectRatio>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
}

impl CarouselTemplate {
    pub fn new(columns: Vec<CarouselColumn>) -> Result<Self, BuildError> {
        if columns.is_empty() {
            return Err(BuildError::MissingField("columns"));
        }
        Ok(Self {
            columns,
            image_aspect_ratio: None,
            image_size: None,
        })
    }

    pub fn with_image_aspect_ratio(mut self, ratio: ImageAspectRatio) -> Self {
        self.image_aspect_ratio = Some(ratio);
        self
    }

    pub fn with_image_size(mut self, size: ImageSize) -> Self {
        self.image_size = Some(size);
        self
    }
}

/// One column of a carousel template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<Action>,

    pub actions: Vec<Action>,
}

impl CarouselColumn {
    pub fn new(text: impl Into<String>, actions: Vec<Action>) -> Result<Self, BuildError> {
        if actions.is_empty() {
            return Err(BuildError::MissingField("actions"));
        }
        Ok(Self {
            thumbnail_image_url: None,
            image_background_color: None,
            title: None,
            text: error::require("text", text)?,
            default_action: None,
            actions,
        })
    }

    pub fn with_thumbnail_image_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_image_url = Some(url.into());
        self
    }

    pub fn with_image_background_color(mut self, color: impl Into<String>) -> Self {
        self.image_background_color = Some(color.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_default_action(mut self, action: Action) -> Self {
        self.default_action = Some(action);
        self
    }
}

/// Image carousel layout: scrollable images, one action each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCarouselTemplate {
    pub columns: Vec<ImageCarouselColumn>,
}

impl ImageCarouselTemplate {
    pub fn new(columns: Vec<ImageCarouselColumn>) -> Result<Self, BuildError> {
        if columns.is_empty() {
            return Err(BuildError::MissingField("columns"));
        }
        Ok(Self { columns })
    }
}

/// One column of an image carousel template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCarouselColumn {
    pub image_url: String,
    pub action: Action,
}

impl ImageCarouselColumn {
    pub fn new(image_url: impl Into<String>, action: Action) -> Result<Self, BuildError> {
        Ok(Self {
            image_url: error::require("imageUrl", image_url)?,
            action,
        })
    }
}

/// Template message: alt text for clients that cannot render the layout,
/// plus the layout itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMessage {
    pub alt_text: String,
    pub template: Template,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReply>,

    #[serde(skip_serializing_if = "Sender::is_omitted")]
    pub sender: Option<Sender>,
}

impl TemplateMessage {
    pub fn new(
        alt_text: impl Into<String>,
        template: impl Into<Template>,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            alt_text: error::require("altText", alt_text)?,
            template: template.into(),
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
