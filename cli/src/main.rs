mod session_file;
mod webhook;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use chat::conversation::REVEAL_TICK_MS;
use chat::session;
use chat::{Conversation, Message, Role, Stamp, Submission, WidgetConfig};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::session_file::{DEFAULT_SESSION_FILE, FileSessionStore};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("webhook exchange failed; see log for details")]
    ExchangeFailed,
    #[error("terminal io failed: {0}")]
    Io(#[from] io::Error),
    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

#[derive(Parser, Debug)]
#[command(name = "matrix-chat", about = "Terminal client for the Matrix chat webhook")]
struct Cli {
    /// Webhook base URL.
    #[arg(long, env = "N8N_WEBHOOK_URL")]
    endpoint: Option<String>,

    #[arg(long, default_value = DEFAULT_SESSION_FILE)]
    session_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one message and print the reply.
    Send {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Interactive session over stdin.
    Repl,
    /// Print the session identifier, creating it if needed.
    Session,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let seed = entropy_seed();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut store = FileSessionStore::open(&cli.session_file);
    let session_id = session::session_id(&mut store, now_ms(), &mut rng);

    if matches!(cli.command, Command::Session) {
        println!("{session_id}");
        return Ok(());
    }

    let config = WidgetConfig::from_raw(cli.endpoint.as_deref());
    if !config.is_configured() {
        tracing::warn!("webhook URL not configured; pass --endpoint or set N8N_WEBHOOK_URL");
    }
    tracing::info!(session = %session_id, configured = config.is_configured(), "terminal ready");

    let conversation = Conversation::with_config(&config, session_id, seed.rotate_left(32));
    let mut terminal = Terminal::new(conversation);

    match cli.command {
        Command::Send { text } => run_send(&mut terminal, &text.join(" ")).await,
        Command::Repl => run_repl(&mut terminal).await,
        Command::Session => Ok(()),
    }
}

async fn run_send(terminal: &mut Terminal, text: &str) -> Result<(), CliError> {
    match terminal.exchange(text).await? {
        Some(Role::System) => Err(CliError::ExchangeFailed),
        _ => Ok(()),
    }
}

async fn run_repl(terminal: &mut Terminal) -> Result<(), CliError> {
    println!("MATRIX TERMINAL v1.0");
    println!("session {}", terminal.conversation.session_id());
    println!("type `exit` to quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        terminal.exchange(&line).await?;
    }

    println!("Messages: {}", terminal.conversation.message_count());
    Ok(())
}

/// Conversation plus the transport and print cursor for one terminal.
struct Terminal {
    conversation: Conversation,
    client: reqwest::Client,
    started: Instant,
    printed: usize,
}

impl Terminal {
    fn new(conversation: Conversation) -> Self {
        Self {
            conversation,
            client: reqwest::Client::new(),
            started: Instant::now(),
            printed: 0,
        }
    }

    fn stamp(&self) -> Result<Stamp, CliError> {
        Ok(Stamp {
            elapsed: self.started.elapsed(),
            iso8601: OffsetDateTime::now_utc().format(&Rfc3339)?,
        })
    }

    /// Run one submission to completion. Returns the role of the final
    /// transcript entry, or `None` when the input was ignored.
    async fn exchange(&mut self, text: &str) -> Result<Option<Role>, CliError> {
        let stamp = self.stamp()?;
        let request = match self.conversation.submit(text, &stamp) {
            Submission::Rejected(reason) => {
                tracing::debug!(?reason, "input ignored");
                return Ok(None);
            }
            Submission::Failed(error) => {
                tracing::warn!(%error, "submission failed before sending");
                self.flush_transcript().await?;
                return Ok(Some(Role::System));
            }
            Submission::Dispatched(request) => request,
        };
        self.flush_transcript().await?;

        let result = webhook::fetch_reply(&self.client, &request).await;
        if let Err(error) = &result {
            tracing::warn!(%error, "webhook exchange failed");
        }
        let role = self.conversation.resolve(result, self.started.elapsed());
        self.flush_transcript().await?;
        Ok(role)
    }

    async fn flush_transcript(&mut self) -> Result<(), CliError> {
        while let Some(message) = self.conversation.transcript().get(self.printed) {
            if message.is_revealing() {
                self.typewrite(self.printed).await?;
            } else {
                println!("{}", render_line(message));
            }
            self.printed += 1;
        }
        Ok(())
    }

    async fn typewrite(&mut self, index: usize) -> Result<(), CliError> {
        let mut out = io::stdout();
        if let Some(message) = self.conversation.transcript().get(index) {
            write!(out, "[{}] {}> ", message.timestamp, role_label(message.role))?;
        }

        let mut shown = 0;
        loop {
            let more = self.conversation.advance_reveal();
            let visible = self
                .conversation
                .transcript()
                .get(index)
                .map_or("", Message::visible_text);
            let fresh = visible.chars().skip(shown).collect::<String>();
            shown += fresh.chars().count();
            write!(out, "{fresh}")?;
            out.flush()?;
            if !more {
                break;
            }
            tokio::time::sleep(Duration::from_millis(u64::from(REVEAL_TICK_MS))).await;
        }
        writeln!(out)?;
        Ok(())
    }
}

fn render_line(message: &Message) -> String {
    format!(
        "[{}] {}> {}",
        message.timestamp,
        role_label(message.role),
        message.visible_text()
    )
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "YOU",
        Role::Bot => "AGENT",
        Role::System => "SYSTEM",
    }
}

fn now_ms() -> u64 {
    let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    u64::try_from(duration.as_millis()).unwrap_or(0)
}

fn entropy_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_nanos());
    now_ms().rotate_left(20) ^ u64::from(nanos) ^ u64::from(std::process::id())
}
