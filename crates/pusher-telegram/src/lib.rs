//! Telegram adapter (teloxide).
//!
//! This crate implements the `pusher-core` BotApi port over Telegram Bot API.

use async_trait::async_trait;

use teloxide::{prelude::*, types::ParseMode as TgParseMode};

use tracing::info;

use pusher_core::{
    domain::{ChatId, ParseMode},
    errors::Error,
    push::{BotApi, TelegramPusher},
    Result,
};

/// Telegram pusher backed by a live teloxide bot.
pub type TelegramTextPusher = TelegramPusher<TeloxideBot>;

#[derive(Clone)]
pub struct TeloxideBot {
    bot: Bot,
}

impl TeloxideBot {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub fn bot(&self) -> Bot {
        self.bot.clone()
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    // Plain `Markdown` is Telegram's legacy flavour, kept for compatibility with
    // messages written before MarkdownV2.
    #[allow(deprecated)]
    fn tg_parse_mode(mode: ParseMode) -> TgParseMode {
        match mode {
            ParseMode::Html => TgParseMode::Html,
            ParseMode::Markdown => TgParseMode::Markdown,
        }
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }
}

#[async_trait]
impl BotApi for TeloxideBot {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        parse_mode: ParseMode,
    ) -> Result<()> {
        self.bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .parse_mode(Self::tg_parse_mode(parse_mode))
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }
}

/// Resolve `token` into an authorized bot and build a pusher for `raw_chat_ids`.
///
/// The token is checked with `getMe` before the chat list is parsed, so a bad
/// token or an unreachable API fails construction even for a valid list.
pub async fn connect(token: &str, raw_chat_ids: &str) -> Result<TelegramTextPusher> {
    let bot = Bot::new(token);
    let me = bot
        .get_me()
        .await
        .map_err(|e| Error::setup("resolve bot client", TeloxideBot::map_err(e)))?;
    info!(username = %me.username(), "telegram bot authorized");

    TelegramPusher::new(token, TeloxideBot::new(bot), raw_chat_ids)
}
