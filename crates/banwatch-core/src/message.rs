use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message received from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel name (e.g. "discord").
    pub channel: String,
    /// Platform user ID, stable across renames.
    pub sender_id: String,
    /// Display name of the sender.
    pub sender_name: Option<String>,
    /// Platform mention syntax for the sender, ready to embed in replies.
    #[serde(default)]
    pub sender_mention: String,
    /// Raw text content.
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Server the message came from, if any.
    #[serde(default)]
    pub guild_id: Option<String>,
    /// Platform-specific target for routing the response (e.g. Discord channel id).
    #[serde(default)]
    pub reply_target: Option<String>,
    /// Whether the platform reports the sender as a server administrator.
    #[serde(default)]
    pub sender_is_admin: bool,
    /// Avatar image URL for the sender, when the platform provides one.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A reply to push back through a channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    /// Rich notification card, when the reply carries one.
    #[serde(default)]
    pub embed: Option<Embed>,
    /// File uploaded alongside the message.
    #[serde(default)]
    pub attachment: Option<Attachment>,
    /// Platform-specific target for routing (e.g. Discord channel id).
    #[serde(default)]
    pub reply_target: Option<String>,
}

/// A rich notification card, platform-neutral.
///
/// Channels translate this into their native format (Discord embeds).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    /// 24-bit RGB color.
    pub color: u32,
    /// Ordered labeled fields making up the body.
    pub fields: Vec<EmbedField>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Filename of an attached image to display inline.
    #[serde(default)]
    pub image_attachment: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// One labeled line in a notification body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A file uploaded with an outgoing message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub data: Vec<u8>,
}
