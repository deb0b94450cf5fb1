//! Info command implementation.

use crate::utils::{CodeJson, print_code_table};
use huffpack_codec::{CodecConfig, HeaderInfo, inspect};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON output for stream inspection.
#[derive(Debug, Serialize, Deserialize)]
struct InfoJson {
    file: String,
    size: u64,
    magic: u32,
    leaf_count: usize,
    header_bits: u64,
    max_code_len: usize,
    codes: Vec<CodeJson>,
}

impl InfoJson {
    fn new(file: &Path, size: u64, info: &HeaderInfo) -> Self {
        Self {
            file: file.display().to_string(),
            size,
            magic: info.magic,
            leaf_count: info.leaf_count,
            header_bits: info.header_bits,
            max_code_len: info.max_code_len,
            codes: info
                .codes
                .iter()
                .map(|(symbol, code)| CodeJson::new(symbol, None, code))
                .collect(),
        }
    }
}

pub fn cmd_info(
    file: &Path,
    config: &CodecConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = inspect(file, config)?;
    let size = std::fs::metadata(file)?.len();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&InfoJson::new(file, size, &info))?
        );
        return Ok(());
    }

    println!("Stream Information");
    println!("==================");
    println!("File: {}", file.display());
    println!("Size: {} bytes ({} bits)", size, size * 8);
    println!("Magic: {}", info.magic);
    println!("Symbols: {} (including EOF)", info.leaf_count);
    println!("Header: {} bits", info.header_bits);
    println!("Longest code: {} bits", info.max_code_len);
    println!();
    print_code_table(info.codes.iter().map(|(symbol, code)| (symbol, None, code)));

    Ok(())
}
