// SPDX-License-Identifier: MIT

//! `agentd` — runs one staging-agent daemon process for a single scope
//! (spec §6 "CLI surface of the daemon binary").

use std::sync::Arc;

use agent_core::Scope;
use agent_daemon::Runner;
use clap::{Parser, Subcommand};
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agentd", version = agent_protocol::PROTOCOL_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the daemon for one scope. Never auto-detaches; exits 0 on
    /// clean shutdown (spec §6).
    Start {
        #[arg(long)]
        foreground: bool,
        #[arg(long)]
        account: String,
        #[arg(long)]
        region: String,
        /// Manual mode: never self-terminate on empty state (spec
        /// GLOSSARY "Manual mode").
        #[arg(long)]
        no_auto_shutdown: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
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
        } => {
            if !foreground {
                // The source always re-execs with --foreground from the
                // Launcher (spec §4.3); a bare `start` without it is a
                // user error rather than something this binary detaches
                // for itself.
                return Err("agentd start requires --foreground (spawn via the Launcher instead)".into());
            }

            let scope = Scope::new(account, region);
            let runner = Runner::new(no_auto_shutdown);
            runner.run(&scope, Arc::new(Notify::new())).await?;
            Ok(())
        }
    }
}
