use std::{env, fmt, path::Path};

use crate::{errors::Error, Result};

/// Typed configuration for the pusher binary.
///
/// The chat id list is kept raw here; it is parsed when the pusher is built so
/// that construction owns the "at least one destination" check.
#[derive(Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub telegram_chat_ids: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_bot_token", &"<redacted>")
            .field("telegram_chat_ids", &self.telegram_chat_ids)
            .finish()
    }
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    pub fn load() -> Result<Self> {
        load_dotenv(Path::new(".env"))?;
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_bot_token = required(&lookup, "TELEGRAM_BOT_TOKEN")?;
        let telegram_chat_ids = required(&lookup, "TELEGRAM_CHAT_IDS")?;

        Ok(Self {
            telegram_bot_token: telegram_bot_token.trim().to_string(),
            telegram_chat_ids,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

/// Variables already set in the process win over the file; a missing file is fine.
fn load_dotenv(path: &Path) -> Result<()> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(Error::Config(format!(
            "failed to load {}: {e}",
            path.display()
        ))),
    }
}
