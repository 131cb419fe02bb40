//! Push backends and the ports they are built on.

pub mod port;
pub mod telegram;

pub use port::{BotApi, TextPusher};
pub use telegram::TelegramPusher;
