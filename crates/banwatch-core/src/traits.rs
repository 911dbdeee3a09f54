use crate::{
    error::BanwatchError,
    message::{IncomingMessage, OutgoingMessage},
    record::BanStatusRecord,
};
use async_trait::async_trait;

/// Messaging Channel trait — the bot's ears and mouth.
///
/// Every messaging platform (Discord today, anything else tomorrow)
/// implements this trait to receive and send messages.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Channel name as it appears in config and logs.
    fn name(&self) -> &str;

    /// Connect and start listening.
    /// Returns a receiver yielding messages as they arrive.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, BanwatchError>;

    /// Deliver an outgoing message through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), BanwatchError>;

    /// Send a typing indicator to show the bot is working.
    async fn send_typing(&self, _target: &str) -> Result<(), BanwatchError> {
        Ok(())
    }

    /// Names of the servers the bot currently participates in.
    async fn guild_names(&self) -> Vec<String> {
        Vec::new()
    }

    /// Display name the platform assigned to the bot account, once known.
    async fn bot_name(&self) -> Option<String> {
        None
    }

    /// Disconnect and release the connection.
    async fn stop(&self) -> Result<(), BanwatchError>;
}

/// Ban lookup trait — the oracle.
///
/// One call per query, three statically distinct outcomes: a record, a
/// confirmed empty answer, or a failure with its cause.
#[async_trait]
pub trait BanLookup: Send + Sync {
    /// Human-readable service name.
    fn name(&self) -> &str;

    /// Look up the ban status of `account_id`.
    ///
    /// `Ok(Some(record))` — the service answered with data.
    /// `Ok(None)` — the service answered but had nothing for this account.
    /// `Err(_)` — the service could not be reached or answered garbage.
    async fn lookup(&self, account_id: &str) -> Result<Option<BanStatusRecord>, BanwatchError>;
}
