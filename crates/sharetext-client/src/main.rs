use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use sharetext_client::commands::{history, send, view};
use sharetext_client::ClientConfig;
use sharetext_shared::constants::{
    DEFAULT_SERVER_URL, DEFAULT_SHARE_BASE, FAILED_TO_LOAD, FAILED_TO_SEND,
};

#[derive(Debug, Parser)]
#[command(name = "sharetext", version)]
#[command(about = "Share a short text message and view the latest one")]
struct Cli {
    /// Base URL of the ShareText server
    #[arg(long, global = true, env = "SHARETEXT_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Prefix used when printing shareable links
    #[arg(long, global = true, env = "SHARETEXT_SHARE_BASE", default_value = DEFAULT_SHARE_BASE)]
    share_base: String,

    /// SQLite file for the recent-history cache
    #[arg(long, global = true, env = "SHARETEXT_HISTORY_DB")]
    history_db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send a message and print its shareable link
    Send {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Show the current message
    View { id: Option<String> },
    /// List recently viewed messages
    History,
    /// Show a history entry in full (1 is the newest)
    Show { number: usize },
    /// Forget all recently viewed messages
    ClearHistory,
    /// Print the link and QR code URL for an identifier
    Link { id: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sharetext_client=info,sharetext_store=info,warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig {
        server_url: cli.server,
        share_base: cli.share_base,
        history_db: cli.history_db,
    };

    match run(&config, cli.command).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &ClientConfig, command: Command) -> anyhow::Result<String> {
    let output = match command {
        Command::Send { message } => send::send_message(config, message.join(" "))
            .await
            .map_err(|e| anyhow::Error::new(e).context(FAILED_TO_SEND))?,
        Command::View { id } => view::view_message(config, id.as_deref())
            .await
            .map_err(|e| anyhow::Error::new(e).context(FAILED_TO_LOAD))?,
        Command::History => history::list_history(config)?,
        Command::Show { number } => history::show_history_entry(config, number)
            .await?
            .ok_or_else(|| anyhow::anyhow!("No history entry #{number}"))?,
        Command::ClearHistory => history::clear_history(config)?,
        Command::Link { id } => send::show_link(config, &id)?,
    };
    Ok(output)
}
