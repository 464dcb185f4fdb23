// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::{Parser, Subcommand};
use stake_ledger::Pubkey;
use stake_ledger_cli::commands::{basket, events, inspect};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "stake-ledger")]
#[command(about = "Inspect stake pool accounts, reward events and baskets", long_about = None)]
struct Cli {
    /// Directory holding `<pubkey>.acct` account dumps.
    #[arg(long, short, global = true, env = "STAKE_LEDGER_DIR", default_value = "accounts")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored accounts and the layout each one decodes as
    Inspect,
    /// List the events held by a reward event queue
    Events {
        /// Reward queue account
        queue: Pubkey,

        /// Only events at or after this cursor
        #[arg(long)]
        since: Option<u32>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compute the asset basket for an amount of pool shares
    Basket {
        /// Pool share mint
        #[arg(long)]
        mint: Pubkey,

        /// Pool vaults in asset order: one for a stake pool, two for a mega pool
        #[arg(long = "vault", required = true, num_args = 1..=2)]
        vaults: Vec<Pubkey>,

        #[arg(long, default_value_t = 1)]
        shares: u64,

        /// Round up (creation) instead of down (redemption)
        #[arg(long)]
        round_up: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "stake_ledger=info,stake_ledger_store=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect => inspect::run(&cli.dir),
        Commands::Events { queue, since, json } => events::run(&cli.dir, &queue, since, json),
        Commands::Basket {
            mint,
            vaults,
            shares,
            round_up,
        } => basket::run(&cli.dir, &mint, &vaults, shares, round_up),
    }
}
