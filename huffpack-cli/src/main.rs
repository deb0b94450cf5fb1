//! huffpack CLI
//!
//! Compress and decompress files with static Huffman coding.

mod commands;
mod utils;

use clap::{ArgAction, Parser, Subcommand};
use commands::{CompressOptions, cmd_compress, cmd_decompress, cmd_info};
use huffpack_codec::CodecConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huffpack")]
#[command(author, version, about = "Huffman file compressor")]
#[command(long_about = "
huffpack compresses a file with a Huffman code built from its own byte
frequencies and stores the code tree in the output header.

Examples:
  huffpack compress notes.txt notes.huf
  huffpack compress notes.txt notes.huf --table
  huffpack decompress notes.huf notes.txt
  huffpack info notes.huf --json
")]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

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

        /// Compressed output file
        output: PathBuf,

        /// Output statistics as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Print the encoding table (symbol, frequency, code)
        #[arg(short, long)]
        table: bool,

        /// Magic number written at the start of the stream
        #[arg(long, default_value_t = CodecConfig::DEFAULT_MAGIC)]
        magic: u32,

        /// Show a spinner while working
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// Compressed input file
        input: PathBuf,

        /// Restored output file
        output: PathBuf,

        /// Magic number the stream must start with
        #[arg(long, default_value_t = CodecConfig::DEFAULT_MAGIC)]
        magic: u32,

        /// Show a spinner while working
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Show the header and code table of a compressed file
    #[command(alias = "i")]
    Info {
        /// Compressed file to inspect
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Magic number the stream must start with
        #[arg(long, default_value_t = CodecConfig::DEFAULT_MAGIC)]
        magic: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            json,
            table,
            magic,
            progress,
        } => cmd_compress(
            &input,
            &output,
            &CompressOptions {
                config: CodecConfig::with_magic(magic),
                json,
                table,
                progress,
                quiet: cli.quiet,
            },
        ),
        Commands::Decompress {
            input,
            output,
            magic,
            progress,
        } => cmd_decompress(
            &input,
            &output,
            &CodecConfig::with_magic(magic),
            progress,
            cli.quiet,
        ),
        Commands::Info { file, json, magic } => {
            cmd_info(&file, &CodecConfig::with_magic(magic), json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
