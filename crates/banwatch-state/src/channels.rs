use dashmap::DashMap;

/// The set of channels where the ban check command may run.
///
/// Starts empty, which disables the check everywhere until an administrator
/// authorizes a channel.
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    inner: DashMap<String, ()>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authorize a channel. Returns `false` if it was already authorized;
    /// the registry is unchanged either way in that case.
    pub fn authorize(&self, channel_id: &str) -> bool {
        self.inner.insert(channel_id.to_string(), ()).is_none()
    }

    /// Withdraw a channel's authorization. Returns `false` if the channel
    /// was not authorized to begin with.
    pub fn deauthorize(&self, channel_id: &str) -> bool {
        self.inner.remove(channel_id).is_some()
    }

    pub fn is_authorized(&self, channel_id: &str) -> bool {
        self.inner.contains_key(channel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_starts_empty() {
        let registry = ChannelRegistry::new();
        assert!(!registry.is_authorized("100"));
    }

    #[test]
    fn test_authorize_is_idempotent() {
        let registry = ChannelRegistry::new();
        assert!(registry.authorize("100"));
        assert!(!registry.authorize("100"));
        assert!(registry.is_authorized("100"));
    }

    #[test]
    fn test_deauthorize_reports_unknown_channels() {
        let registry = ChannelRegistry::new();
        registry.authorize("100");
        assert!(registry.deauthorize("100"));
        assert!(!registry.is_authorized("100"));
        assert!(!registry.deauthorize("100"));
    }

    #[test]
    fn test_channels_are_independent() {
        let registry = ChannelRegistry::new();
        registry.authorize("100");
        assert!(registry.is_authorized("100"));
        assert!(!registry.is_authorized("200"));
    }
}
