use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "uniqfile-cmd")]
#[command(about = "Command-line utility for creating uniquely named files")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create one or more unique files and print their paths
    Create {
        /// Target directory (defaults to the system temporary directory)
        #[arg(short, long, default_value = "")]
        dir: String,

        /// Text placed before the random component of the name
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Text placed after the random component of the name
        #[arg(short, long, default_value = "")]
        suffix: String,

        /// Octal permission bits (e.g. 600, 0644 or 0o755)
        #[arg(short, long, default_value = "600", value_parser = utils::parse_mode)]
        mode: u32,

        /// Number of files to create
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        /// Attempts per file before giving up
        #[arg(long, default_value_t = uniqfile::DEFAULT_MAX_ATTEMPTS)]
        max_attempts: u32,

        /// Collisions tolerated before the random source is reseeded
        #[arg(long, default_value_t = uniqfile::DEFAULT_RESEED_AFTER)]
        reseed_after: u32,
    },

    /// Print random name components
    Suffix {
        /// Number of suffixes to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        /// Fixed seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Create {
            dir,
            prefix,
            suffix,
            mode,
            count,
            max_attempts,
            reseed_after,
        } => commands::create::run(commands::create::CreateArgs {
            dir,
            prefix,
            suffix,
            mode,
            count,
            max_attempts,
            reseed_after,
        }),
        Commands::Suffix { count, seed } => commands::suffix::run(count, seed),
    }
}
