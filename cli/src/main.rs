//! Terminal front end for the Parley chat backend.
//!
//! Speaks the same four-endpoint HTTP surface as the browser client:
//! `/connect`, `/disconnect`, `/send`, and the 500 ms `/poll` loop. Events
//! are printed as they are applied; stdin lines are sent as messages
//! (`/`-prefixed lines are backend commands and are never echoed locally).
//! `:quit` or end-of-input disconnects and exits.

mod backend;
mod screen;
mod session;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::backend::Backend;
use crate::screen::{Screen, compose_echo};
use crate::session::Session;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("poll request failed with status {0}")]
    PollStatus(u16),
    #[error("poll response malformed: {0}")]
    Decode(#[from] events::DecodeError),
    #[error("connect rejected by server: {0}")]
    Rejected(String),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("no username provided")]
    MissingUsername,
}

#[derive(Parser, Debug)]
#[command(name = "parley-cli", about = "Terminal client for the Parley chat backend")]
struct Cli {
    /// Base URL of the chat backend.
    #[arg(long, env = "PARLEY_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Name to connect as; prompted for interactively when omitted.
    #[arg(long, env = "PARLEY_USERNAME")]
    username: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let backend = Backend::new(&cli.base_url);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let username = match cli.username {
        Some(name) if !name.trim().is_empty() => name.trim().to_owned(),
        _ => prompt_username(&mut lines).await?,
    };

    backend.connect(&username).await?;

    // Applied events arrive through this channel so printing stays on the
    // main task, in arrival order.
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();

    let mut session = Session::new(username);
    session.start_polling(backend.clone(), events_tx);
    println!("\u{2705} Connected as {}", session.username);

    let mut screen = Screen::default();

    loop {
        tokio::select! {
            maybe_event = events_rx.recv() => {
                let Some(event) = maybe_event else {
                    break;
                };
                if event.is_forced_disconnect() {
                    if let events::ServerEvent::Status { payload } = &event {
                        println!("\u{26d4} {payload}");
                    }
                    session.stop_polling();
                    break;
                }
                for line in screen.apply(&event) {
                    println!("{line}");
                }
            }
            maybe_line = lines.next_line() => {
                let Some(line) = maybe_line? else {
                    // End of input is a quit.
                    backend.disconnect().await;
                    session.stop_polling();
                    break;
                };
                if line.trim() == ":quit" {
                    backend.disconnect().await;
                    session.stop_polling();
                    break;
                }
                if line.is_empty() {
                    continue;
                }
                if let Some(echo) = compose_echo(&line) {
                    println!("{echo}");
                }
                if let Err(error) = backend.send_message(&line).await {
                    tracing::warn!(error = %error, "send failed");
                    println!("\u{274c} Could not send message (backend down?)");
                }
            }
        }
    }

    Ok(())
}

/// Read a username from stdin, re-prompting until it is non-empty.
async fn prompt_username(
    lines: &mut tokio::io::Lines<BufReader<tokio::io::Stdin>>,
) -> Result<String, CliError> {
    loop {
        println!("name: ");
        let Some(line) = lines.next_line().await? else {
            return Err(CliError::MissingUsername);
        };
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_owned());
        }
        println!("\u{26a0}\u{fe0f} Please enter a name.");
    }
}
