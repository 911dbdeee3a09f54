//! The ban check workflow: gates, lookup, and the result card.

use banwatch_core::locale::Locale;
use banwatch_core::message::{Attachment, IncomingMessage, OutgoingMessage};
use std::sync::Arc;
use tracing::info;

use crate::i18n;
use crate::render;

use super::CommandContext;

pub(super) async fn handle_check(
    ctx: &CommandContext<'_>,
    locale: Locale,
    msg: &IncomingMessage,
) -> OutgoingMessage {
    // --- 1. CHANNEL GATE ---
    // Runs before the cooldown so an unauthorized attempt never spends the
    // caller's budget.
    let authorized = msg
        .reply_target
        .as_deref()
        .is_some_and(|target| ctx.registry.is_authorized(target));
    if !authorized {
        return super::reply(msg, i18n::t("channel_not_authorized", locale));
    }

    // --- 2. COOLDOWN ---
    if let Err(wait) = ctx.cooldown.try_acquire(&msg.sender_id) {
        return super::reply(msg, i18n::cooldown_wait(locale, wait.secs));
    }

    // --- 3. ARGUMENT ---
    let account_id = msg.text.split_whitespace().nth(1).unwrap_or("");
    if account_id.is_empty() || !account_id.chars().all(|c| c.is_ascii_digit()) {
        let hint = i18n::invalid_account_id(locale, ctx.command_prefix);
        return super::reply(msg, format!("{} {hint}", msg.sender_mention));
    }

    info!(
        "check by {} for {account_id} (locale={locale})",
        msg.sender_name.as_deref().unwrap_or(&msg.sender_id)
    );

    // --- 4. LOOKUP ---
    let typing_handle = start_typing(ctx, msg).await;
    let outcome = ctx.lookup.lookup(account_id).await;
    if let Some(h) = typing_handle {
        h.abort();
    }

    let record = match outcome {
        Ok(Some(record)) => record,
        Ok(None) => {
            let text = i18n::t("lookup_empty", locale);
            return super::reply(msg, format!("{} {text}", msg.sender_mention));
        }
        Err(e) => {
            let text = i18n::lookup_error(locale, &e.to_string());
            return super::reply(msg, format!("{} {text}", msg.sender_mention));
        }
    };

    // --- 5. RESULT CARD ---
    let mut notification = render::render(&record, locale, account_id);
    notification.embed.thumbnail_url = msg.avatar_url.clone();
    notification.embed.footer = Some(ctx.embed_footer.to_string());
    notification.embed.timestamp = Some(msg.timestamp);

    let attachment = ctx.assets.bytes(notification.asset).map(|data| Attachment {
        filename: notification.asset.filename().to_string(),
        data: data.to_vec(),
    });
    if attachment.is_none() {
        // No file on disk: ship the card without its illustration.
        notification.embed.image_attachment = None;
    }

    OutgoingMessage {
        text: msg.sender_mention.clone(),
        embed: Some(notification.embed),
        attachment,
        reply_target: msg.reply_target.clone(),
    }
}

/// Show a typing indicator while the lookup is in flight, refreshed before
/// the platform lets it expire. The returned handle is aborted once the
/// reply is ready.
async fn start_typing(
    ctx: &CommandContext<'_>,
    msg: &IncomingMessage,
) -> Option<tokio::task::JoinHandle<()>> {
    let target = msg.reply_target.clone()?;
    let ch = Arc::clone(ctx.channel);
    let _ = ch.send_typing(&target).await;
    Some(tokio::spawn(async move {
        loop {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            if ch.send_typing(&target).await.is_err() {
                break;
            }
        }
    }))
}
