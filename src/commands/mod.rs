//! Built-in bot commands — gates, lookups, and registry changes.

mod check;
mod settings;
mod status;


use banwatch_core::message::{IncomingMessage, OutgoingMessage};
use banwatch_core::traits::{BanLookup, Channel};
use banwatch_state::{ChannelRegistry, CooldownGate, LocaleStore};
use std::sync::Arc;

use crate::assets::Assets;

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub locales: &'a LocaleStore,
    pub registry: &'a ChannelRegistry,
    pub cooldown: &'a dyn CooldownGate,
    pub lookup: &'a dyn BanLookup,
    pub channel: &'a Arc<dyn Channel>,
    pub assets: &'a Assets,
    pub command_prefix: &'a str,
    pub embed_footer: &'a str,
}

/// Known bot commands.
pub enum Command {
    Guilds,
    Lang,
    SetBanChannel,
    RemoveBanChannel,
    Check,
}

impl Command {
    /// Parse a command from message text. Returns `None` for text without
    /// the command prefix and for unknown command words.
    pub fn parse(text: &str, prefix: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        let cmd = first.strip_prefix(prefix)?;
        match cmd {
            "guilds" => Some(Self::Guilds),
            "lang" => Some(Self::Lang),
            "setbanchannel" => Some(Self::SetBanChannel),
            "removebanchannel" => Some(Self::RemoveBanChannel),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

/// Handle a command and return the reply, if the command produces one.
///
/// Administrator commands from non-administrators return `None`: the
/// original bot stays silent instead of advertising the command.
pub async fn handle(
    cmd: Command,
    ctx: &CommandContext<'_>,
    msg: &IncomingMessage,
) -> Option<OutgoingMessage> {
    let locale = ctx.locales.get(&msg.sender_id);
    match cmd {
        Command::Guilds => Some(status::handle_guilds(ctx.channel, locale, msg).await),
        Command::Lang => Some(settings::handle_lang(ctx.locales, locale, msg)),
        Command::SetBanChannel => settings::handle_set_ban_channel(ctx.registry, locale, msg),
        Command::RemoveBanChannel => settings::handle_remove_ban_channel(ctx.registry, locale, msg),
        Command::Check => Some(check::handle_check(ctx, locale, msg).await),
    }
}

/// Plain text reply routed back where the message came from.
fn reply(msg: &IncomingMessage, text: impl Into<String>) -> OutgoingMessage {
    OutgoingMessage {
        text: text.into(),
        reply_target: msg.reply_target.clone(),
        ..Default::default()
    }
}
