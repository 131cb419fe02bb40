use async_trait::async_trait;

use crate::{
    domain::{ChatId, ParseMode},
    Result,
};

/// Push capability shared by every backend (Telegram today; email and other
/// chat systems fit behind the same interface).
///
/// Callers should hold a `dyn TextPusher` and stay backend-agnostic.
#[async_trait]
pub trait TextPusher: Send + Sync {
    /// Push `content` as-is, rendered as rich text (HTML subset).
    async fn push_text(&self, content: &str) -> Result<()>;

    /// Push `title` as a leading line followed by `content`, rendered as Markdown.
    async fn push_markdown(&self, title: &str, content: &str) -> Result<()>;
}

/// Remote send boundary of a chat bot service.
///
/// The wire protocol belongs to the implementation; the core only needs a
/// single send per destination.
#[async_trait]
pub trait BotApi: Send + Sync {
    async fn send_message(&self, chat_id: ChatId, text: &str, parse_mode: ParseMode)
        -> Result<()>;
}
