//! Format helpers for strings with interpolation.

use banwatch_core::locale::Locale;

/// Format the cooldown denial with the remaining wait in whole seconds.
pub fn cooldown_wait(locale: Locale, secs: u64) -> String {
    match locale {
        Locale::Fr => format!(
            "\u{23f3} Veuillez attendre {secs} secondes avant de r\u{00e9}utiliser cette commande."
        ),
        _ => format!("\u{23f3} Please wait {secs} seconds before using this command again."),
    }
}

/// Format the invalid account ID rejection with a usage hint.
pub fn invalid_account_id(locale: Locale, prefix: &str) -> String {
    match locale {
        Locale::Fr => format!(
            "\u{274c} **UID invalide !**\n\u{27a1}\u{fe0f} Veuillez fournir un UID valide sous la forme : `{prefix}check 123456789`"
        ),
        _ => format!(
            "\u{274c} **Invalid UID!**\n\u{27a1}\u{fe0f} Please use: `{prefix}check 123456789`"
        ),
    }
}

/// Format a lookup failure with its cause in a code block.
pub fn lookup_error(locale: Locale, cause: &str) -> String {
    match locale {
        Locale::Fr => format!("\u{26a0}\u{fe0f} Erreur :\n```{cause}```"),
        _ => format!("\u{26a0}\u{fe0f} Error:\n```{cause}```"),
    }
}

/// Format a known suspension length in months.
pub fn period_months(locale: Locale, months: i64) -> String {
    match locale {
        Locale::Fr => format!("plus de {months} mois"),
        _ => format!("more than {months} months"),
    }
}

/// Format the ban channel authorization confirmation.
pub fn ban_channel_set(locale: Locale, channel: &str) -> String {
    match locale {
        Locale::Fr => format!(
            "\u{2705} Les commandes de v\u{00e9}rification de bannissement sont maintenant autoris\u{00e9}es dans {channel}"
        ),
        _ => format!("\u{2705} Ban check commands are now allowed in {channel}"),
    }
}

/// Format the ban channel removal confirmation.
pub fn ban_channel_removed(locale: Locale, channel: &str) -> String {
    match locale {
        Locale::Fr => format!(
            "\u{274c} V\u{00e9}rification de bannissement d\u{00e9}sactiv\u{00e9}e dans {channel}"
        ),
        _ => format!("\u{274c} Ban check disabled in {channel}"),
    }
}

/// Format the notice that a channel was never authorized.
pub fn ban_channel_not_set(locale: Locale, channel: &str) -> String {
    match locale {
        Locale::Fr => format!("{channel} n'\u{00e9}tait pas d\u{00e9}fini comme salon de bannissement."),
        _ => format!("{channel} was not set as ban channel."),
    }
}
