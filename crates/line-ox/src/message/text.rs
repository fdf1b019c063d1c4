use crate::{error, error::BuildError, quick_reply::QuickReply, sender::Sender};

/// Text message holding one or more lines.
///
/// Serialization expands this into one wire record per line, each record
/// carrying its own copy of the quick-reply and sender attachments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    pub lines: Vec<String>,
    pub quick_reply: Option<QuickReply>,
    pub sender: Option<Sender>,
}

impl TextMessage {
    /// Single-line text message.
    pub fn new(text: impl Into<String>) -> Result<Self, BuildError> {
        Self::lines([error::require("text", text)?])
    }

    /// Multi-line text message; every line must be non-empty.
    pub fn lines<I, S>(lines: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() || lines.iter().any(String::is_empty) {
            return Err(BuildError::MissingField("text"));
        }
        Ok(Self {
            lines,
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
