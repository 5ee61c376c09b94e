//! Diary CLI - a calendar-based personal diary with tags and yearly stats
//!
//! This is the command-line interface for Diary. It reads and writes the
//! same key-value store the core library defines.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{calendar, entries, init, misc, paid, stats, tags};
use crate::constants::LOG_ENV;
use crate::errors::exit_code_for;
use crate::ui::{badge, Badge};

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli).await {
        let ui = ctx.ui(&Default::default());
        eprintln!("{}", badge(&ui, Badge::Err, &e.to_string()));
        std::process::exit(exit_code_for(&e));
    }
}

/// Log to stderr, filtered by `DIARY_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(ctx: &AppContext<'_>, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init(args) => init::handle_init(ctx, args).await,
        Commands::Add(args) => entries::handle_add(ctx, args).await,
        Commands::Show(args) => entries::handle_show(ctx, args).await,
        Commands::Edit(args) => entries::handle_edit(ctx, args).await,
        Commands::Delete(args) => entries::handle_delete(ctx, args).await,
        Commands::Day(args) => entries::handle_day(ctx, args).await,
        Commands::OnThisDay(args) => entries::handle_on_this_day(ctx, args).await,
        Commands::Search(args) => entries::handle_search(ctx, args).await,
        Commands::Tags(args) => tags::handle_tags(ctx, args).await,
        Commands::Stats(args) => stats::handle_stats(ctx, args).await,
        Commands::Calendar(args) => calendar::handle_calendar(ctx, args).await,
        Commands::Week(args) => calendar::handle_week(ctx, args).await,
        Commands::Paid(args) => paid::handle_paid(ctx, args).await,
        Commands::Completions { shell } => misc::handle_completions(*shell),
    }
}
