//! Compress command implementation.

use crate::utils::{check_output, compressed_path, format_size};
use hufpak_codec::{IoOptions, compress_file};
use log::debug;
use std::path::PathBuf;

pub fn cmd_compress(
    input: &PathBuf,
    output: Option<PathBuf>,
    force: bool,
    options: &IoOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| compressed_path(input));
    check_output(input, &output, force)?;
    debug!("compress options: {:?}", options);

    let stats = compress_file(input, &output, options)?;

    println!("Compressed: {} -> {}", input.display(), output.display());
    println!("  Original size: {}", format_size(stats.input_len));
    println!("  Compressed size: {}", format_size(stats.output_len));
    println!("  Unique symbols: {}", stats.unique_symbols);
    println!("  Space savings: {:.1}%", stats.space_savings());

    Ok(())
}
