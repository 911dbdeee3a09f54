//! # banwatch-lookup
//!
//! Ban lookup service client for Banwatch.

pub mod client;

pub use client::BanApiClient;
