use bon::Builder;
use serde::{Deserialize, Serialize};

/// Per-message sender override: a display name and icon substituted for the
/// bot's default identity.
///
/// Both fields are independently optional. A sender with neither field set
/// never reaches the wire: the parent message omits its `sender` key
/// entirely instead of emitting an empty object.
///
/// ```
/// use line_ox::Sender;
///
/// let sender = Sender::builder()
///     .name("test1")
///     .icon_url("https://example.com/test2")
///     .build();
/// assert!(!sender.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[builder(into)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Sender {
    pub fn new(name: Option<String>, icon_url: Option<String>) -> Self {
        Self { name, icon_url }
    }

    /// True when neither field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.icon_url.is_none()
    }

    /// Skip predicate for the `sender` key, shared by every message kind:
    /// an absent or empty sender is omitted from output.
    pub(crate) fn is_omitted(sender: &Option<Sender>) -> bool {
        sender.as_ref().is_none_or(Sender::is_empty)
    }
}
