//! Info command implementation.

use crate::utils::format_size;
use hufpak_codec::inspect;
use std::path::PathBuf;

pub fn cmd_info(
    artifact: &PathBuf,
    codes: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(artifact)?;
    let info = inspect(&data)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Artifact Information");
    println!("====================");
    println!("File: {}", artifact.display());
    println!("Size: {}", format_size(info.artifact_len()));
    println!("Original size: {}", format_size(info.total_symbols));
    println!("Unique symbols: {}", info.unique_symbols);
    println!("Header: {} bytes", info.header_len);
    println!(
        "Payload: {} bytes ({} code bits, {} pad bits)",
        info.payload_len, info.payload_bits, info.pad_bits
    );
    println!("Longest code: {} bits", info.max_code_len);
    if info.total_symbols > 0 {
        println!(
            "Space savings: {:.1}%",
            (1.0 - info.artifact_len() as f64 / info.total_symbols as f64) * 100.0
        );
    }

    if codes {
        println!();
        println!("{:>6}  {:>10}  Code", "Symbol", "Frequency");
        println!("{}", "-".repeat(40));
        for symbol in &info.symbols {
            println!(
                "{:>6}  {:>10}  {}",
                display_symbol(symbol.symbol),
                symbol.frequency,
                symbol.code
            );
        }
    }

    Ok(())
}

/// Printable ASCII as-is, everything else as hex.
fn display_symbol(symbol: u8) -> String {
    if symbol.is_ascii_graphic() {
        format!("'{}'", symbol as char)
    } else {
        format!("0x{:02X}", symbol)
    }
}
