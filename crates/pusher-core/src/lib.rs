//! Core domain for the notification pusher.
//!
//! This crate is intentionally framework-agnostic. The Telegram Bot API client
//! lives behind the `BotApi` port, implemented in the adapter crate.

pub mod chat_ids;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod push;

pub use errors::{Error, Result};
