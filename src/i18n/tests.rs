use super::*;
use banwatch_core::locale::Locale;

const ALL_KEYS: [&str; 16] = [
    "banned_title",
    "clean_title",
    "label_reason",
    "label_duration",
    "label_nickname",
    "label_player_id",
    "label_region",
    "label_status",
    "banned_reason",
    "clean_status",
    "period_unavailable",
    "channel_not_authorized",
    "language_confirmed",
    "language_invalid",
    "guilds_header",
    "lookup_empty",
];

#[test]
fn test_every_key_has_both_locale_variants() {
    for key in ALL_KEYS {
        assert_ne!(t(key, Locale::En), "???", "key '{key}' should have an English variant");
        assert_ne!(t(key, Locale::Fr), "???", "key '{key}' should have a French variant");
    }
}

#[test]
fn test_french_variants_differ_from_english() {
    // Keys that genuinely differ between the two locales.
    let sample_keys = [
        "banned_title",
        "clean_title",
        "label_reason",
        "banned_reason",
        "channel_not_authorized",
        "lookup_empty",
    ];
    for key in sample_keys {
        assert_ne!(
            t(key, Locale::Fr),
            t(key, Locale::En),
            "key '{key}' in French should differ from English"
        );
    }
}

#[test]
fn test_unknown_key_returns_placeholder() {
    assert_eq!(t("nonexistent_key", Locale::En), "???");
    assert_eq!(t("nonexistent_key", Locale::Fr), "???");
}

#[test]
fn test_format_helpers() {
    // cooldown_wait
    assert!(cooldown_wait(Locale::En, 17).contains("wait 17 seconds"));
    assert!(cooldown_wait(Locale::Fr, 17).contains("attendre 17 secondes"));

    // invalid_account_id carries the usage hint with the live prefix
    assert!(invalid_account_id(Locale::En, "!").contains("`!check 123456789`"));
    assert!(invalid_account_id(Locale::Fr, "?").contains("`?check 123456789`"));

    // lookup_error wraps the cause in a code block
    assert!(lookup_error(Locale::En, "timed out").contains("```timed out```"));
    assert!(lookup_error(Locale::Fr, "timed out").contains("```timed out```"));

    // period_months
    assert_eq!(period_months(Locale::En, 6), "more than 6 months");
    assert_eq!(period_months(Locale::Fr, 6), "plus de 6 mois");

    // ban channel confirmations carry the channel mention
    assert!(ban_channel_set(Locale::En, "<#100>").contains("<#100>"));
    assert!(ban_channel_removed(Locale::En, "<#100>").contains("<#100>"));
    assert!(ban_channel_not_set(Locale::En, "<#100>").starts_with("<#100>"));
    assert!(ban_channel_not_set(Locale::Fr, "<#100>").starts_with("<#100>"));
}
