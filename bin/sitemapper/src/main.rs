//! Sitemapper CLI
//!
//! Generates sitemap chunk files, a sitemap index, and robots.txt for a
//! directory of static HTML pages.
//!
//! This is the binary entry point. The command implementations are in
//! `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for sitemapper.
#[derive(Parser)]
#[command(
    name = "sitemapper",
    version,
    about = "Sitemap and robots.txt generator for static sites"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "sitemapper.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate sitemap chunks, the sitemap index, and robots.txt
    Generate {
        /// Site root to scan and write artifacts into
        #[arg(short, long, default_value = ".")]
        root: std::path::PathBuf,
        /// Override the publishing domain (skips CNAME resolution)
        #[arg(long)]
        domain: Option<String>,
        /// Override the maximum URLs per sitemap chunk
        #[arg(long)]
        max_urls: Option<usize>,
        /// Chunk naming policy (sequential, random)
        #[arg(long)]
        chunk_names: Option<String>,
        /// Keep chunk files left over from earlier runs
        #[arg(long)]
        no_prune: bool,
    },
    /// Validate configuration and report what a run would produce
    Check {
        /// Site root to inspect
        #[arg(short, long, default_value = ".")]
        root: std::path::PathBuf,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    sitemapper::init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            root,
            domain,
            max_urls,
            chunk_names,
            no_prune,
        } => {
            sitemapper::cmd::generate::run(
                &cli.config,
                &root,
                domain.as_deref(),
                max_urls,
                chunk_names.as_deref(),
                no_prune,
            )?;
        }
        Commands::Check { root, strict } => {
            sitemapper::cmd::check::run(&cli.config, &root, strict)?;
        }
    }

    Ok(())
}
