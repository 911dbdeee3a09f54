//! Configuration command handlers: lang, setbanchannel, removebanchannel.

use banwatch_core::locale::Locale;
use banwatch_core::message::{IncomingMessage, OutgoingMessage};
use banwatch_state::{ChannelRegistry, LocaleStore};
use tracing::warn;

use crate::i18n;

pub(super) fn handle_lang(
    locales: &LocaleStore,
    locale: Locale,
    msg: &IncomingMessage,
) -> OutgoingMessage {
    let arg = msg.text.split_whitespace().nth(1).unwrap_or("");
    match arg.parse::<Locale>() {
        Ok(new_locale) => {
            locales.set(&msg.sender_id, new_locale);
            // Confirm in the language the user just picked.
            let confirmation = i18n::t("language_confirmed", new_locale);
            super::reply(msg, format!("{} {confirmation}", msg.sender_mention))
        }
        Err(_) => super::reply(msg, i18n::t("language_invalid", locale)),
    }
}

pub(super) fn handle_set_ban_channel(
    registry: &ChannelRegistry,
    locale: Locale,
    msg: &IncomingMessage,
) -> Option<OutgoingMessage> {
    if !msg.sender_is_admin {
        warn!("setbanchannel from non-admin {} ignored", msg.sender_id);
        return None;
    }
    let channel_id = target_channel(msg)?;
    registry.authorize(&channel_id);
    let mention = format!("<#{channel_id}>");
    Some(super::reply(msg, i18n::ban_channel_set(locale, &mention)))
}

pub(super) fn handle_remove_ban_channel(
    registry: &ChannelRegistry,
    locale: Locale,
    msg: &IncomingMessage,
) -> Option<OutgoingMessage> {
    if !msg.sender_is_admin {
        warn!("removebanchannel from non-admin {} ignored", msg.sender_id);
        return None;
    }
    let channel_id = target_channel(msg)?;
    let mention = format!("<#{channel_id}>");
    let text = if registry.deauthorize(&channel_id) {
        i18n::ban_channel_removed(locale, &mention)
    } else {
        i18n::ban_channel_not_set(locale, &mention)
    };
    Some(super::reply(msg, text))
}

/// The channel an admin command targets: the named one, or the invoking
/// channel when the argument is omitted. `None` means the argument could
/// not be read as a channel, which ends the command without a reply.
fn target_channel(msg: &IncomingMessage) -> Option<String> {
    match msg.text.split_whitespace().nth(1) {
        Some(arg) => {
            let parsed = parse_channel_ref(arg);
            if parsed.is_none() {
                warn!("unreadable channel reference '{arg}' from {}", msg.sender_id);
            }
            parsed
        }
        None => msg.reply_target.clone(),
    }
}

/// Read a Discord channel reference: a `<#123>` mention or a bare ID.
fn parse_channel_ref(arg: &str) -> Option<String> {
    let id = arg
        .strip_prefix("<#")
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(arg);
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        Some(id.to_string())
    } else {
        None
    }
}
