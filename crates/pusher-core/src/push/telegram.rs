use std::fmt;

use async_trait::async_trait;
use tracing::{debug, info_span, warn, Instrument, Span};

use crate::{
    chat_ids::parse_chat_ids,
    domain::{ChatId, ParseMode},
    errors::Error,
    push::port::{BotApi, TextPusher},
    Result,
};

/// Telegram pusher: sends every message to a fixed list of chats.
///
/// Deliveries run one chat at a time in list order and stop at the first
/// failure. Chats already reached keep their message.
pub struct TelegramPusher<B> {
    api_token: String,
    span: Span,
    client: B,
    chat_ids: Vec<ChatId>,
}

impl<B: BotApi> TelegramPusher<B> {
    /// Build a pusher around an already resolved bot client.
    ///
    /// `raw_chat_ids` is a comma-separated list, e.g. `"123456,4312341,123123"`.
    pub fn new(api_token: impl Into<String>, client: B, raw_chat_ids: &str) -> Result<Self> {
        let chat_ids =
            parse_chat_ids(raw_chat_ids).map_err(|e| Error::setup("parse chat ids", e))?;

        Ok(Self {
            api_token: api_token.into(),
            span: info_span!("telegram"),
            client,
            chat_ids,
        })
    }

    pub fn chat_ids(&self) -> &[ChatId] {
        &self.chat_ids
    }

    async fn deliver(&self, text: &str, parse_mode: ParseMode) -> Result<()> {
        async {
            for &chat_id in &self.chat_ids {
                debug!(%chat_id, ?parse_mode, "sending message");
                if let Err(e) = self.client.send_message(chat_id, text, parse_mode).await {
                    warn!(%chat_id, error = %e, "send failed, skipping remaining chats");
                    return Err(Error::Delivery {
                        chat_id,
                        source: Box::new(e),
                    });
                }
            }
            Ok(())
        }
        .instrument(self.span.clone())
        .await
    }
}

impl<B> TelegramPusher<B> {
    /// Numeric bot id, the public part of a `<bot_id>:<secret>` token.
    fn bot_id(&self) -> &str {
        self.api_token
            .split_once(':')
            .map_or("<redacted>", |(id, _)| id)
    }
}

impl<B> fmt::Debug for TelegramPusher<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramPusher")
            .field("bot_id", &self.bot_id())
            .field("chat_ids", &self.chat_ids)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<B: BotApi> TextPusher for TelegramPusher<B> {
    async fn push_text(&self, content: &str) -> Result<()> {
        self.deliver(content, ParseMode::Html).await
    }

    async fn push_markdown(&self, title: &str, content: &str) -> Result<()> {
        let full_message = format!("{title}\n{content}");
        self.deliver(&full_message, ParseMode::Markdown).await
    }
}
