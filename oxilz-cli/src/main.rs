//! OxiLZ CLI - sliding-window LZ77 compression
//!
//! Compresses and decompresses files with the OxiLZ token stream, and can
//! inspect or test existing streams.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{cmd_compress, cmd_decompress, cmd_inspect, cmd_test};
use oxilz_lz77::DEFAULT_WINDOW_SIZE;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "oxilz")]
#[command(author, version, about = "Sliding-window LZ77 compressor")]
#[command(long_about = "
OxiLZ compresses files with a small-window LZ77 coder. Each token is a
literal (9 bits) or a back-reference of up to 15 bytes (17 bits).

Examples:
  oxilz compress notes.txt
  oxilz compress notes.txt -o notes.lz77 --window-size 400
  oxilz compress notes.txt --framed
  oxilz decompress notes.txt.lz77
  oxilz inspect notes.txt.lz77 --tokens
  oxilz test notes.txt.lz77
")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (default: <input>.lz77)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sliding window size in bytes (1-400)
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
        window_size: usize,

        /// Wrap the stream in a frame with length and CRC-32
        #[arg(short, long)]
        framed: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output file (default: input without .lz77, or <input>.out)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input is framed
        #[arg(short, long)]
        framed: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show statistics about a compressed file
    #[command(alias = "i")]
    Inspect {
        /// Compressed file to inspect
        input: PathBuf,

        /// Input is framed
        #[arg(short, long)]
        framed: bool,

        /// List every token
        #[arg(short, long)]
        tokens: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Test compressed file integrity
    #[command(alias = "t")]
    Test {
        /// Compressed file to test
        input: PathBuf,

        /// Input is framed
        #[arg(short, long)]
        framed: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let level: Level = level
        .parse()
        .map_err(|_| format!("invalid log level: {level}"))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            window_size,
            framed,
            progress,
            verbose,
        } => cmd_compress(&input, output, window_size, framed, progress, verbose),
        Commands::Decompress {
            input,
            output,
            framed,
            verbose,
        } => cmd_decompress(&input, output, framed, verbose),
        Commands::Inspect {
            input,
            framed,
            tokens,
            json,
        } => cmd_inspect(&input, framed, tokens, json),
        Commands::Test {
            input,
            framed,
            verbose,
        } => cmd_test(&input, framed, verbose),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "oxilz", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
