use std::fmt;

/// Telegram chat id (numeric, may be negative for groups and channels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the remote service should render a message body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMode {
    /// Telegram's HTML subset.
    Html,
    /// Legacy Telegram Markdown.
    Markdown,
}
