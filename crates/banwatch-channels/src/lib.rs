//! # banwatch-channels
//!
//! Messaging channel implementations for Banwatch.

pub mod discord;

pub use discord::DiscordChannel;
