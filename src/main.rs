use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

use notepatch::{config, report};

/// Rewrites lib/noteService.ts to look clients up by user_id
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    notepatch::init_with_logger(level).context("Failed to initialize logging")?;

    info!("Starting notepatch v{}", notepatch::version());

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let path = config::target_path(&cwd);

    notepatch::run(&path).with_context(|| format!("Failed to patch {}", config::TARGET_PATH))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_confirmation(&mut out, &config::RULES)?;
    out.flush()?;

    Ok(())
}
