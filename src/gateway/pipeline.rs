//! Message processing pipeline — from incoming text to a routed reply.

use super::Gateway;
use crate::commands;
use banwatch_core::message::IncomingMessage;
use tracing::info;

impl Gateway {
    /// Process a single incoming message.
    pub(super) async fn handle_message(&self, incoming: IncomingMessage) {
        let preview = if incoming.text.chars().count() > 60 {
            let truncated: String = incoming.text.chars().take(60).collect();
            format!("{truncated}...")
        } else {
            incoming.text.clone()
        };
        info!(
            "[{}] {} says: {}",
            incoming.channel,
            incoming.sender_name.as_deref().unwrap_or("unknown"),
            preview
        );

        let Some(cmd) = commands::Command::parse(&incoming.text, &self.bot_config.command_prefix)
        else {
            // Not a command; this bot answers nothing else.
            return;
        };

        let channel = match self.channels.get(&incoming.channel) {
            Some(channel) => channel,
            None => return,
        };

        let ctx = commands::CommandContext {
            locales: &self.locales,
            registry: &self.registry,
            cooldown: self.cooldown.as_ref(),
            lookup: self.lookup.as_ref(),
            channel,
            assets: &self.assets,
            command_prefix: &self.bot_config.command_prefix,
            embed_footer: &self.bot_config.embed_footer,
        };

        if let Some(reply) = commands::handle(cmd, &ctx, &incoming).await {
            self.send_outgoing(&incoming, reply).await;
        }
    }
}
