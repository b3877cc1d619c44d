//! Dump command implementation.

use hufpak_codec::bits::{rle_encode, to_bit_string};
use std::path::PathBuf;

pub fn cmd_dump(file: &PathBuf, rle: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(file)?;
    let bits = to_bit_string(&data);

    if rle {
        println!("{}", rle_encode(&bits));
    } else {
        println!("{}", bits);
    }

    Ok(())
}
