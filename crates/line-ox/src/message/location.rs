use serde::{Deserialize, Serialize};

use crate::{error, error::BuildError, quick_reply::QuickReply, sender::Sender};

/// Location message: a titled street address with coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationMessage {
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_reply: Option<QuickReply>,

    #[serde(skip_serializing_if = "Sender::is_omitted")]
    pub sender: Option<Sender>,
}

impl LocationMessage {
    /// Coordinates must be finite and within [-90, 90] / [-180, 180].
    pub fn new(
        title: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, BuildError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(BuildError::invalid(
                "latitude",
                format!("{latitude} is not a finite value in [-90, 90]"),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(BuildError::invalid(
                "longitude",
                format!("{longitude} is not a finite value in [-180, 180]"),
            ));
        }
        Ok(Self {
            title: error::require("title", title)?,
            address: error::require("address", address)?,
            latitude,
            longitude,
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
