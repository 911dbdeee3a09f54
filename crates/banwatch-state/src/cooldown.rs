use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Window applied to the ban check command: one use per 30 seconds per user.
pub const CHECK_COOLDOWN_WINDOW: Duration = Duration::from_secs(30);

/// How long a denied caller has to wait, in whole seconds (rounded down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryAfter {
    pub secs: u64,
}

/// Per-key cooldown gate.
///
/// Callers only learn "go" or "wait this long"; the policy behind that
/// answer is the implementation's business.
pub trait CooldownGate: Send + Sync {
    /// Try to consume the caller's budget. A denial never changes state.
    fn try_acquire(&self, key: &str) -> Result<(), RetryAfter>;
}

/// Fixed window, one use per window per key.
///
/// A granted acquisition restarts the key's window from that moment.
/// Denials leave the window untouched, so repeated probing cannot extend it.
#[derive(Debug)]
pub struct FixedWindow {
    window: Duration,
    last: DashMap<String, Instant>,
}

impl FixedWindow {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last: DashMap::new(),
        }
    }

    /// Check-and-set against a caller-supplied clock reading.
    ///
    /// The entry guard keeps the read and the write atomic per key.
    pub fn try_acquire_at(&self, key: &str, now: Instant) -> Result<(), RetryAfter> {
        match self.last.entry(key.to_string()) {
            Entry::Occupied(mut slot) => {
                let elapsed = now.duration_since(*slot.get());
                if elapsed < self.window {
                    let remaining = self.window - elapsed;
                    Err(RetryAfter {
                        secs: remaining.as_secs(),
                    })
                } else {
                    slot.insert(now);
                    Ok(())
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(now);
                Ok(())
            }
        }
    }
}

impl CooldownGate for FixedWindow {
    fn try_acquire(&self, key: &str) -> Result<(), RetryAfter> {
        self.try_acquire_at(key, Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(30);

    #[test]
    fn test_first_acquisition_is_granted() {
        let gate = FixedWindow::new(WINDOW);
        assert!(gate.try_acquire_at("u1", Instant::now()).is_ok());
    }

    #[test]
    fn test_denied_inside_window_with_decreasing_wait() {
        let gate = FixedWindow::new(WINDOW);
        let t0 = Instant::now();
        gate.try_acquire_at("u1", t0).unwrap();

        let res = gate.try_acquire_at("u1", t0 + Duration::from_secs(5));
        assert_eq!(res, Err(RetryAfter { secs: 25 }));
        let res = gate.try_acquire_at("u1", t0 + Duration::from_secs(12));
        assert_eq!(res, Err(RetryAfter { secs: 18 }));
    }

    #[test]
    fn test_wait_rounds_down_to_whole_seconds() {
        let gate = FixedWindow::new(WINDOW);
        let t0 = Instant::now();
        gate.try_acquire_at("u1", t0).unwrap();

        // 24.5s left reports as 24.
        let res = gate.try_acquire_at("u1", t0 + Duration::from_millis(5_500));
        assert_eq!(res, Err(RetryAfter { secs: 24 }));
    }

    #[test]
    fn test_denials_do_not_extend_the_window() {
        let gate = FixedWindow::new(WINDOW);
        let t0 = Instant::now();
        gate.try_acquire_at("u1", t0).unwrap();

        for s in [5u64, 15, 29] {
            assert!(gate.try_acquire_at("u1", t0 + Duration::from_secs(s)).is_err());
        }
        // Still measured from t0, not from the probes above.
        assert!(gate.try_acquire_at("u1", t0 + Duration::from_secs(30)).is_ok());
    }

    #[test]
    fn test_grant_restarts_the_window() {
        let gate = FixedWindow::new(WINDOW);
        let t0 = Instant::now();
        gate.try_acquire_at("u1", t0).unwrap();
        gate.try_acquire_at("u1", t0 + Duration::from_secs(30)).unwrap();

        let res = gate.try_acquire_at("u1", t0 + Duration::from_secs(31));
        assert_eq!(res, Err(RetryAfter { secs: 29 }));
    }

    #[test]
    fn test_keys_are_independent() {
        let gate = FixedWindow::new(WINDOW);
        let t0 = Instant::now();
        gate.try_acquire_at("u1", t0).unwrap();

        assert!(gate.try_acquire_at("u2", t0).is_ok());
        assert!(gate
            .try_acquire_at("u1", t0 + Duration::from_secs(1))
            .is_err());
    }
}
