use serde::{Deserialize, Serialize};

use crate::{
    message::{
        AudioMessage, ImageMessage, ImagemapMessage, LocationMessage, StickerMessage,
        TemplateMessage, VideoMessage,
    },
    quick_reply::QuickReply,
    sender::Sender,
};

/// One wire record of the API's `messages` array.
///
/// Internally tagged by `type`. Key order within a record follows the
/// schema: the tag first, kind-specific fields in schema order, then
/// `quickReply`, then `sender` — with absent optionals omitted entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Payload {
    Text(TextPayload),
    Sticker(StickerMessage),
    Image(ImageMessage),
    Video(VideoMessage),
    Audio(AudioMessage),
    Location(LocationMessage),
    Imagemap(ImagemapMessage),
    Template(TemplateMessage),
}

/// Wire record for one expanded text line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPayload {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReply>,

    #[serde(skip_serializing_if = "Sender::is_omitted")]
    pub sender: Option<Sender>,
}
