//! # banwatch-state
//!
//! In-memory shared state for the bot: per-user locale choices, the set of
//! channels where ban checks are allowed, and the per-user command cooldown.
//! Everything lives for the process lifetime and is safe to touch from
//! concurrent handler tasks.

pub mod channels;
pub mod cooldown;
pub mod locale;

pub use channels::ChannelRegistry;
pub use cooldown::{CooldownGate, FixedWindow, RetryAfter, CHECK_COOLDOWN_WINDOW};
pub use locale::LocaleStore;
