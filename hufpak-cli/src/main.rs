//! hufpak CLI - order-0 Huffman file compressor
//!
//! Compresses single files into `.huf` artifacts and restores them
//! byte-for-byte.

mod commands;
mod utils;

use clap::{ArgAction, Args, Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress, cmd_dump, cmd_info};
use hufpak_codec::IoOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hufpak")]
#[command(author, version, about = "Lossless Huffman file compressor")]
#[command(long_about = "
hufpak compresses a file with classic order-0 Huffman coding. The artifact
stores the symbol frequencies followed by the packed codes, and decompresses
back to the exact original bytes.

Examples:
  hufpak compress notes.txt
  hufpak compress notes.txt -o /tmp/notes.huf
  hufpak decompress notes.txt.huf
  hufpak info notes.txt.huf --codes
  hufpak dump notes.txt --rle
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all log output
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

        /// Output artifact (defaults to <input>.huf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output
        #[arg(short, long)]
        force: bool,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Decompress an artifact
    #[command(alias = "d")]
    Decompress {
        /// Artifact to decompress
        input: PathBuf,

        /// Output file (defaults to <input> without .huf, or <input>.out)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing output
        #[arg(short, long)]
        force: bool,

        #[command(flatten)]
        io: IoArgs,
    },

    /// Show the header of an artifact
    #[command(alias = "i")]
    Info {
        /// Artifact to inspect
        artifact: PathBuf,

        /// List every symbol with its frequency and code
        #[arg(short, long)]
        codes: bool,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Print the bits of a file as 0/1 text
    Dump {
        /// File to dump
        file: PathBuf,

        /// Run-length encode the bit string
        #[arg(short, long)]
        rle: bool,
    },
}

/// Source and sink options shared by compress and decompress.
#[derive(Args, Debug, Clone, Copy)]
struct IoArgs {
    /// Read the input into memory instead of memory-mapping it
    #[arg(long)]
    no_mmap: bool,

    /// Prefault the memory mapping
    #[arg(long)]
    populate: bool,

    /// Skip fsync of the output before it is renamed into place
    #[arg(long)]
    no_sync: bool,
}

impl From<IoArgs> for IoOptions {
    fn from(args: IoArgs) -> Self {
        IoOptions::new()
            .mmap(!args.no_mmap)
            .populate(args.populate)
            .sync(!args.no_sync)
    }
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            force,
            io,
        } => cmd_compress(&input, output, force, &io.into()),
        Commands::Decompress {
            input,
            output,
            force,
            io,
        } => cmd_decompress(&input, output, force, &io.into()),
        Commands::Info {
            artifact,
            codes,
            json,
        } => cmd_info(&artifact, codes, json),
        Commands::Dump { file, rle } => cmd_dump(&file, rle),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
