//! Command reply strings: gate rejections and confirmations.

use banwatch_core::locale::Locale;

pub(super) fn lookup(key: &str, locale: Locale) -> Option<&'static str> {
    Some(match key {
        "channel_not_authorized" => match locale {
            Locale::Fr => {
                "Cette commande n'est pas disponible dans ce salon. Veuillez l'utiliser dans un salon autoris\u{00e9}."
            }
            _ => "This command is not available in this channel. Please use it in an authorized channel.",
        },
        "language_confirmed" => match locale {
            Locale::Fr => "\u{2705} Langue d\u{00e9}finie sur le fran\u{00e7}ais.",
            _ => "\u{2705} Language set to English.",
        },
        "language_invalid" => match locale {
            Locale::Fr => "\u{274c} Langue invalide. Disponibles : `en`, `fr`",
            _ => "\u{274c} Invalid language. Available: `en`, `fr`",
        },
        "guilds_header" => match locale {
            Locale::Fr => "Le bot est dans les guilds suivantes :",
            _ => "The bot is in the following guilds:",
        },
        "lookup_empty" => match locale {
            Locale::Fr => {
                "\u{274c} **Impossible d'obtenir les informations.**\nVeuillez r\u{00e9}essayer plus tard."
            }
            _ => "\u{274c} **Could not get information. Please try again later.**",
        },
        _ => return None,
    })
}
