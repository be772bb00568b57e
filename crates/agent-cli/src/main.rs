// SPDX-License-Identifier: MIT

//! `agent` — the two in-scope CLI entry points onto the staging agent
//! (spec §6 "CLI surface of the daemon binary"): `start --foreground` and
//! `stop`. The full command tree (status/diff/add/edit/apply/...) is out
//! of scope (SPEC_FULL.md "Workspace layout").

use std::sync::Arc;

use agent_client::Launcher;
use agent_core::Scope;
use agent_daemon::Runner;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agent", version = agent_protocol::PROTOCOL_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the staging agent daemon for one scope, blocking until it
    /// shuts down (spec §6: `stage agent start --foreground ...`).
    Start {
        #[arg(long)]
        foreground: bool,
        #[arg(long)]
        account: String,
        #[arg(long)]
        region: String,
        /// Never self-terminate on empty state (GLOSSARY "Manual mode").
        #[arg(long)]
        no_auto_shutdown: bool,
    },
    /// Ask a running daemon to shut down. A no-op if none is running.
    Stop {
        #[arg(long)]
        account: String,
        #[arg(long)]
        region: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Start {
            foreground,
            account,
            region,
            no_auto_shutdown,
        } => start(foreground, account, region, no_auto_shutdown).await,
        Command::Stop { account, region } => stop(account, region).await,
    }
}

async fn start(foreground: bool, account: String, region: String, no_auto_shutdown: bool) -> Result<()> {
    if !foreground {
        anyhow::bail!("`agent start` requires --foreground; there is no background-spawning entry point in this CLI (use Launcher::ensure_running from a library caller instead)");
    }

    let scope = Scope::new(account, region);
    let runner = Runner::new(no_auto_shutdown);
    runner
        .run(&scope, Arc::new(Notify::new()))
        .await
        .context("staging agent exited with an error")
}

async fn stop(account: String, region: String) -> Result<()> {
    let scope = Scope::new(account, region);
    let launcher = Launcher::new(scope);
    // Idempotent: Launcher::shutdown treats "nothing was listening" as
    // success (spec §4.3 "Shutdown is idempotent").
    launcher
        .shutdown()
        .await
        .context("failed to stop the staging agent")
}
