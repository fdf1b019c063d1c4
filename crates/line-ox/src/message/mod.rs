mod audio;
mod image;
mod imagemap;
mod location;
mod sticker;
mod template;
mod text;
mod video;

pub use audio::AudioMessage;
pub use image::ImageMessage;
pub use imagemap::{Area, BaseSize, ImagemapAction, ImagemapMessage};
pub use location::LocationMessage;
pub use sticker::StickerMessage;
pub use template::{
    ButtonsTemplate, CarouselColumn, CarouselTemplate, ConfirmTemplate, ImageAspectRatio,
    ImageCarouselColumn, ImageCarouselTemplate, ImageSize, Template, TemplateMessage,
};
pub use text::TextMessage;
pub use video::VideoMessage;

use crate::payload::{Payload, TextPayload};

/// One outbound message of any kind, ready for expansion into wire records.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(TextMessage),
    Sticker(StickerMessage),
    Image(ImageMessage),
    Video(VideoMessage),
    Audio(AudioMessage),
    Location(LocationMessage),
    Imagemap(ImagemapMessage),
    Template(TemplateMessage),
}

impl Message {
    /// Expands this message into its wire records.
    ///
    /// Every kind yields exactly one record except text, which yields one
    /// record per line, each record carrying its own copy of the quick-reply
    /// and sender attachments. Total over constructed values; calling it
    /// twice on the same value yields structurally identical output.
    pub fn to_payloads(&self) -> Vec<Payload> {
        match self {
            Message::Text(text) => text
                .lines
                .iter()
                .map(|line| {
                    Payload::Text(TextPayload {
                        text: line.clone(),
                        quick_reply: text.quick_reply.clone(),
                        sender: text.sender.clone(),
                    })
                })
                .collect(),
            Message::Sticker(sticker) => vec![Payload::Sticker(sticker.clone())],
            Message::Image(image) => vec![Payload::Image(image.clone())],
            Message::Video(video) => vec![Payload::Video(video.clone())],
            Message::Audio(audio) => vec![Payload::Audio(audio.clone())],
            Message::Location(location) => vec![Payload::Location(location.clone())],
            Message::Imagemap(imagemap) => vec![Payload::Imagemap(imagemap.clone())],
            Message::Template(template) => vec![Payload::Template(template.clone())],
        }
    }
}

impl From<TextMessage> for Message {
    fn from(message: TextMessage) -> Self {
        Message::Text(message)
    }
}

impl From<StickerMessage> for Message {
    fn from(message: StickerMessage) -> Self {
        Message::Sticker(message)
    }
}

impl From<ImageMessage> for Message {
    fn from(message: ImageMessage) -> Self {
        Message::Image(message)
    }
}

impl From<VideoMessage> for Message {
    fn from(message: VideoMessage) -> Self {
        Message::Video(message)
    }
}

impl From<AudioMessage> for Message {
    fn from(message: AudioMessage) -> Self {
        Message::Audio(message)
    }
}

impl From<LocationMessage> for Message {
    fn from(message: LocationMessage) -> Self {
        Message::Location(message)
    }
}

impl From<ImagemapMessage> for Message {
    fn from(message: ImagemapMessage) -> Self {
        Message::Imagemap(message)
    }
}

impl From<TemplateMessage> for Message {
    fn from(message: TemplateMessage) -> Self {
        Message::Template(message)
    }
}

/// Ordered batch of messages, the shape of a request body's `messages` array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages(pub Vec<Message>);

impl Messages {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push<T: Into<Message>>(&mut self, message: T) {
        self.0.push(message.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    /// Flattens every message's expansion into the final `messages` array.
    pub fn to_payloads(&self) -> Vec<Payload> {
        self.0.iter().flat_map(Message::to_payloads).collect()
    }
}

impl From<Message> for Messages {
    fn from(value: Message) -> Self {
        Messages(vec![value])
    }
}

impl<T> From<Vec<T>> for Messages
where
    T: Into<Message>,
{
    fn from(value: Vec<T>) -> Self {
        Messages(value.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<Message> for Messages {
    fn from_iter<T: IntoIterator<Item = Message>>(iter: T) -> Self {
        Messages(iter.into_iter().collect())
    }
}

impl std::ops::Index<usize> for Messages {
    type Output = Message;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Messages {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
