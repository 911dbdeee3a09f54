//! Ban status rendering — turns a lookup record into a notification card.

use banwatch_core::locale::Locale;
use banwatch_core::message::{Embed, EmbedField};
use banwatch_core::record::BanStatusRecord;

use crate::i18n;

/// Card color for banned accounts.
pub const ALERT_COLOR: u32 = 0xFF0000;
/// Card color for clean accounts.
pub const CLEAR_COLOR: u32 = 0x00FF00;

/// Which result illustration a notification carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Banned,
    Clean,
}

impl AssetKind {
    /// Filename of the illustration inside the assets directory.
    pub fn filename(&self) -> &'static str {
        match self {
            AssetKind::Banned => "banned.gif",
            AssetKind::Clean => "notbanned.gif",
        }
    }
}

/// A rendered ban status: the card plus the illustration bound to it.
#[derive(Debug, Clone)]
pub struct Notification {
    pub embed: Embed,
    pub asset: AssetKind,
}

/// Render a ban status record into a notification card.
///
/// Pure: the same record, locale, and account ID always produce the same
/// card. Thumbnail, footer, and timestamp are stamped by the caller, which
/// knows the invoking message.
pub fn render(record: &BanStatusRecord, locale: Locale, account_id: &str) -> Notification {
    let banned = record.is_banned();
    let asset = if banned {
        AssetKind::Banned
    } else {
        AssetKind::Clean
    };

    let mut fields = Vec::new();
    if banned {
        fields.push(EmbedField::new(
            i18n::t("label_reason", locale),
            i18n::t("banned_reason", locale),
        ));
        let period = match record.period.months() {
            Some(months) => i18n::period_months(locale, months),
            None => i18n::t("period_unavailable", locale).to_string(),
        };
        fields.push(EmbedField::new(i18n::t("label_duration", locale), period));
    } else {
        fields.push(EmbedField::new(
            i18n::t("label_status", locale),
            i18n::t("clean_status", locale),
        ));
    }
    fields.push(EmbedField::new(
        i18n::t("label_nickname", locale),
        format!("`{}`", record.nickname),
    ));
    fields.push(EmbedField::new(
        i18n::t("label_player_id", locale),
        format!("`{account_id}`"),
    ));
    fields.push(EmbedField::new(
        i18n::t("label_region", locale),
        format!("`{}`", record.region),
    ));

    let title = if banned {
        i18n::t("banned_title", locale)
    } else {
        i18n::t("clean_title", locale)
    };

    Notification {
        embed: Embed {
            title: title.to_string(),
            color: if banned { ALERT_COLOR } else { CLEAR_COLOR },
            fields,
            image_attachment: Some(asset.filename().to_string()),
            ..Default::default()
        },
        asset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banwatch_core::record::SuspensionPeriod;

    fn banned_record() -> BanStatusRecord {
        BanStatusRecord {
            is_banned: 1,
            period: SuspensionPeriod::Months(6),
            nickname: "Shadow".to_string(),
            region: "EU".to_string(),
        }
    }

    fn clean_record() -> BanStatusRecord {
        BanStatusRecord {
            is_banned: 0,
            period: SuspensionPeriod::Text("N/A".to_string()),
            nickname: "Shadow".to_string(),
            region: "EU".to_string(),
        }
    }

    #[test]
    fn test_banned_card_in_english() {
        let n = render(&banned_record(), Locale::En, "123456789");
        assert_eq!(n.embed.color, ALERT_COLOR);
        assert_eq!(n.asset, AssetKind::Banned);
        assert_eq!(n.embed.title, "**\u{258c} Banned Account \u{1f6d1} **");
        assert_eq!(n.embed.image_attachment.as_deref(), Some("banned.gif"));

        let names: Vec<&str> = n.embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            ["Reason", "Suspension duration", "Nickname", "Player ID", "Region"]
        );
        assert_eq!(n.embed.fields[1].value, "more than 6 months");
        assert_eq!(n.embed.fields[2].value, "`Shadow`");
        assert_eq!(n.embed.fields[3].value, "`123456789`");
        assert_eq!(n.embed.fields[4].value, "`EU`");
    }

    #[test]
    fn test_clean_card_in_french() {
        let n = render(&clean_record(), Locale::Fr, "123456789");
        assert_eq!(n.embed.color, CLEAR_COLOR);
        assert_eq!(n.asset, AssetKind::Clean);
        assert_eq!(n.embed.title, "**\u{258c} Compte non banni \u{2705} **");
        assert_eq!(n.embed.image_attachment.as_deref(), Some("notbanned.gif"));

        let names: Vec<&str> = n.embed.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Statut", "Pseudo", "ID du joueur", "R\u{00e9}gion"]);
        assert_eq!(
            n.embed.fields[0].value,
            "Aucune preuve suffisante pour confirmer l\u{2019}utilisation de hacks sur ce compte."
        );
    }

    #[test]
    fn test_textual_period_renders_as_unavailable() {
        let mut record = banned_record();
        record.period = SuspensionPeriod::Text("permanent".to_string());

        let en = render(&record, Locale::En, "1");
        assert_eq!(en.embed.fields[1].value, "unavailable");
        let fr = render(&record, Locale::Fr, "1");
        assert_eq!(fr.embed.fields[1].value, "indisponible");
    }

    #[test]
    fn test_french_period_in_months() {
        let n = render(&banned_record(), Locale::Fr, "1");
        assert_eq!(n.embed.fields[1].value, "plus de 6 mois");
    }

    #[test]
    fn test_asset_ignores_locale() {
        assert_eq!(render(&banned_record(), Locale::En, "1").asset, AssetKind::Banned);
        assert_eq!(render(&banned_record(), Locale::Fr, "1").asset, AssetKind::Banned);
        assert_eq!(render(&clean_record(), Locale::Fr, "1").asset, AssetKind::Clean);
    }

    #[test]
    fn test_nonzero_flag_renders_as_banned() {
        let mut record = clean_record();
        record.is_banned = 2;
        let n = render(&record, Locale::En, "1");
        assert_eq!(n.embed.color, ALERT_COLOR);
        assert_eq!(n.asset, AssetKind::Banned);
    }
}
