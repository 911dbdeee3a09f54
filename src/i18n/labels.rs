//! Result card strings: titles, field labels, and verdict sentences.

use banwatch_core::locale::Locale;

pub(super) fn lookup(key: &str, locale: Locale) -> Option<&'static str> {
    Some(match key {
        // --- Titles ---
        "banned_title" => match locale {
            Locale::Fr => "**\u{258c} Compte banni \u{1f6d1} **",
            _ => "**\u{258c} Banned Account \u{1f6d1} **",
        },
        "clean_title" => match locale {
            Locale::Fr => "**\u{258c} Compte non banni \u{2705} **",
            _ => "**\u{258c} Clean Account \u{2705} **",
        },
        // --- Field labels ---
        "label_reason" => match locale {
            Locale::Fr => "Raison",
            _ => "Reason",
        },
        "label_duration" => match locale {
            Locale::Fr => "Dur\u{00e9}e de la suspension",
            _ => "Suspension duration",
        },
        "label_nickname" => match locale {
            Locale::Fr => "Pseudo",
            _ => "Nickname",
        },
        "label_player_id" => match locale {
            Locale::Fr => "ID du joueur",
            _ => "Player ID",
        },
        "label_region" => match locale {
            Locale::Fr => "R\u{00e9}gion",
            _ => "Region",
        },
        "label_status" => match locale {
            Locale::Fr => "Statut",
            _ => "Status",
        },
        // --- Verdict sentences ---
        "banned_reason" => match locale {
            Locale::Fr => "Ce compte a \u{00e9}t\u{00e9} confirm\u{00e9} comme utilisant des hacks.",
            _ => "This account was confirmed for using cheats.",
        },
        "clean_status" => match locale {
            Locale::Fr => {
                "Aucune preuve suffisante pour confirmer l\u{2019}utilisation de hacks sur ce compte."
            }
            _ => "No sufficient evidence of cheat usage on this account.",
        },
        "period_unavailable" => match locale {
            Locale::Fr => "indisponible",
            _ => "unavailable",
        },
        _ => return None,
    })
}
