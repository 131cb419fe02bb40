use std::num::ParseIntError;

use crate::domain::ChatId;

/// Core error type for the pusher.
///
/// Adapter crates map their transport errors into `External` so callers see a
/// single error type regardless of backend.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to convert chat id {token:?} to int64")]
    InvalidChatId {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("no valid chat ids found")]
    NoChatIds,

    #[error("{stage} failed")]
    Setup {
        stage: &'static str,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to send message to telegram chat {chat_id}")]
    Delivery {
        chat_id: ChatId,
        #[source]
        source: Box<Error>,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("external error: {0}")]
    External(String),
}

impl Error {
    /// Wrap a construction failure with the stage that produced it.
    pub fn setup(stage: &'static str, source: Error) -> Self {
        Self::Setup {
            stage,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
