//! # banwatch-core
//!
//! Core types, traits, configuration, and error handling for the Banwatch bot.

pub mod config;
pub mod error;
pub mod locale;
pub mod message;
pub mod record;
pub mod traits;
