//! Line-oriented driver: one JSON request per stdin line, one JSON reply per
//! stdout line. Broadcasts are prefixed `broadcast `, rejections `reply `.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bughouse_core::{handle_message, BughouseSession, SessionConfig, SharedSession};

#[derive(Parser, Debug)]
#[command(name = "bughouse-cli", about = "Play a bughouse session over stdin/stdout")]
struct Args {
    /// JSON session configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SessionConfig::default(),
    };
    let session = BughouseSession::new(config).context("building boards")?;
    info!(config = ?session.config(), "starting session");
    let session = SharedSession::new(session);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = handle_message(&session, &line);
        let prefix = if reply.is_broadcast() { "broadcast" } else { "reply" };
        writeln!(stdout, "{prefix} {}", reply.to_json()?)?;
        stdout.flush()?;
    }

    Ok(())
}
