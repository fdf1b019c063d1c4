#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Typed message payload builders for the LINE Messaging API.
//!
//! This crate shapes the `messages` array of push/reply/multicast request
//! bodies: immutable value objects validate their fields at construction
//! and serialize to the exact wire schema, with absent optional fields
//! omitted rather than emitted as null or empty objects. Transport,
//! authentication, and webhook handling are out of scope.
//!
//! # Example
//!
//! ```
//! use line_ox::{Message, Messages, Sender, StickerMessage, TextMessage};
//!
//! # fn main() -> Result<(), line_ox::BuildError> {
//! let sender = Sender::builder().name("brown").build();
//!
//! let greeting = TextMessage::lines(["hello", "world"])?.with_sender(sender);
//! let sticker = StickerMessage::new("446", "1988")?;
//!
//! let messages = Messages::from(vec![Message::from(greeting), Message::from(sticker)]);
//!
//! // Two text records plus one sticker record.
//! let payloads = messages.to_payloads();
//! assert_eq!(payloads.len(), 3);
//!
//! let body = serde_json::json!({ "to": "U4af4980629...", "messages": payloads });
//! # let _ = body;
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod error;
pub mod message;
pub mod payload;
pub mod quick_reply;
pub mod sender;

// Re-export main types
pub use action::{Action, DatetimepickerMode};
pub use error::BuildError;
pub use message::{
    Area, AudioMessage, BaseSize, ButtonsTemplate, CarouselColumn, CarouselTemplate,
    ConfirmTemplate, ImageAspectRatio, ImageCarouselColumn, ImageCarouselTemplate, ImageMessage,
    ImageSize, ImagemapAction, ImagemapMessage, LocationMessage, Message, Messages,
    StickerMessage, Template, TemplateMessage, TextMessage, VideoMessage,
};
pub use payload::{Payload, TextPayload};
pub use quick_reply::{QuickReply, QuickReplyButton};
pub use sender::Sender;
