//! Decompress command implementation.

use crate::utils::create_spinner;
use huffpack_codec::{CodecConfig, decompress};
use std::fs;
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    config: &CodecConfig,
    progress: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(format!("Decompressing {}", input.display()), progress && !quiet);
    let result = decompress(input, output, config);
    spinner.finish_and_clear();
    result?;

    if !quiet {
        let restored = fs::metadata(output)?.len();
        println!(
            "{} -> {} ({} bytes)",
            input.display(),
            output.display(),
            restored
        );
    }

    Ok(())
}
