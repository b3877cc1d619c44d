//! Decompress command implementation.

use crate::utils::{check_output, decompressed_path, format_size};
use hufpak_codec::{IoOptions, decompress_file};
use std::path::PathBuf;

pub fn cmd_decompress(
    input: &PathBuf,
    output: Option<PathBuf>,
    force: bool,
    options: &IoOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| decompressed_path(input));
    check_output(input, &output, force)?;

    let stats = decompress_file(input, &output, options)?;

    println!("Decompressed: {} -> {}", input.display(), output.display());
    println!(
        "  {} -> {}",
        format_size(stats.output_len),
        format_size(stats.input_len)
    );

    Ok(())
}
