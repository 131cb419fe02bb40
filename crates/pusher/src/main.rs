//! `pusher` CLI: send one notification to the configured Telegram chats.
//!
//! Configuration comes from the environment (or `.env`):
//! - `TELEGRAM_BOT_TOKEN`
//! - `TELEGRAM_CHAT_IDS` (comma-separated, e.g. `123456,-4312341`)

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tracing::info;

use pusher_core::{config::Config, push::TextPusher};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Push rich text (Telegram HTML subset)
    Text {
        /// Message words; read from stdin when omitted. Use `--` before text starting with `-`.
        content: Vec<String>,
    },
    /// Push a Markdown message with TITLE as its first line
    Markdown {
        title: String,
        /// Message words; read from stdin when omitted. Use `--` before text starting with `-`.
        content: Vec<String>,
    },
}

async fn content_or_stdin(words: Vec<String>) -> anyhow::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("failed to read message from stdin")?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}

async fn run(pusher: &dyn TextPusher, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Text { content } => {
            let content = content_or_stdin(content).await?;
            pusher.push_text(&content).await.context("push text failed")?;
            info!("text message pushed");
        }
        Command::Markdown { title, content } => {
            let content = content_or_stdin(content).await?;
            pusher
                .push_markdown(&title, &content)
                .await
                .context("push markdown failed")?;
            info!("markdown message pushed");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    pusher_core::logging::init("pusher")?;

    let cfg = Config::load().context("failed to load configuration")?;
    let pusher = pusher_telegram::connect(&cfg.telegram_bot_token, &cfg.telegram_chat_ids)
        .await
        .context("failed to build telegram pusher")?;
    info!(chats = pusher.chat_ids().len(), "telegram pusher ready");

    run(&pusher, cli.command).await
}
