use banwatch_core::locale::Locale;
use dashmap::DashMap;

/// Per-user locale preferences.
///
/// Users who never picked a language read as English. Entries are only ever
/// written by an explicit language change and are forgotten on restart.
#[derive(Debug, Default)]
pub struct LocaleStore {
    inner: DashMap<String, Locale>,
}

impl LocaleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored locale for `user_id`, or the default.
    pub fn get(&self, user_id: &str) -> Locale {
        self.inner.get(user_id).map(|l| *l).unwrap_or_default()
    }

    /// Store a locale for `user_id`, replacing any previous choice.
    pub fn set(&self, user_id: &str, locale: Locale) {
        self.inner.insert(user_id.to_string(), locale);
        tracing::debug!("locale for {user_id} set to {locale}");
    }
}
