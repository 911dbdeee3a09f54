//! Informational command handlers: guilds.

use banwatch_core::locale::Locale;
use banwatch_core::message::{IncomingMessage, OutgoingMessage};
use banwatch_core::traits::Channel;
use std::sync::Arc;

use crate::i18n;

pub(super) async fn handle_guilds(
    channel: &Arc<dyn Channel>,
    locale: Locale,
    msg: &IncomingMessage,
) -> OutgoingMessage {
    let names = channel.guild_names().await;
    let listing = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {name}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    let header = i18n::t("guilds_header", locale);
    super::reply(msg, format!("{header}\n{listing}"))
}
