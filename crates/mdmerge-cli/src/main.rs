// Rust guideline compliant 2026-02-06

//! mdmerge CLI Application
//!
//! Command-line interface for merging a directory of Markdown files into a
//! single aggregate file.

use clap::Parser;
use mdmerge_core::{candidates, merge, Config};
use std::path::PathBuf;
use tracing::debug;

mod logging;

#[derive(Parser, Debug)]
#[command(
    name = "mdm",
    version,
    about = "mdmerge: concatenate a directory of Markdown files",
    long_about = "mdmerge concatenates every Markdown file in a directory (minus its README) into a single aggregate file, replacing any previous aggregate. A successful run prints nothing.",
    after_help = "Examples:\n  mdm\n  mdm notes/ --sort\n  mdm --output all.md\n  mdm --dry-run\n"
)]
struct Cli {
    /// Directory to merge (defaults to the current directory)
    dir: Option<PathBuf>,

    /// Aggregate output file name
    #[arg(short, long)]
    output: Option<String>,

    /// Sort candidates lexicographically instead of using listing order
    #[arg(long)]
    sort: bool,

    /// List candidate files without writing the aggregate
    #[arg(long)]
    dry_run: bool,

    /// Logging level (error, warn, info, debug)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;
    run(cli)
}

/// Executes the parsed command.
///
/// Configuration comes from the target directory and the environment; the
/// command-line flags override it last.
fn run(cli: Cli) -> anyhow::Result<()> {
    let dir = cli.dir.unwrap_or_else(|| PathBuf::from("."));

    let mut config = Config::load(&dir)?;
    if let Some(output) = cli.output {
        config.output = output;
    }
    if cli.sort {
        config.sort = true;
    }
    debug!(dir = %dir.display(), output = %config.output, "resolved target");

    if cli.dry_run {
        for path in candidates(&dir, &config)? {
            println!("{}", path.display());
        }
        return Ok(());
    }

    merge(&dir, &config)?;
    Ok(())
}
