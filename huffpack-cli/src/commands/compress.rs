//! Compress command implementation.

use crate::utils::{CodeJson, create_spinner, print_code_table};
use huffpack_codec::{CodecConfig, CompressStats, EncodingReport, HuffmanEncoder, compress};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for the compress command.
pub struct CompressOptions {
    pub config: CodecConfig,
    pub json: bool,
    pub table: bool,
    pub progress: bool,
    pub quiet: bool,
}

/// JSON output for a compression run.
#[derive(Debug, Serialize, Deserialize)]
struct CompressJson {
    input: String,
    output: String,
    original_bits: u64,
    compressed_bits: u64,
    header_bits: u64,
    body_bits: u64,
    compressed_bytes: u64,
    leaf_count: usize,
    space_savings: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<Vec<CodeJson>>,
}

impl CompressJson {
    fn new(
        input: &Path,
        output: &Path,
        stats: &CompressStats,
        report: Option<&[EncodingReport]>,
    ) -> Self {
        Self {
            input: input.display().to_string(),
            output: output.display().to_string(),
            original_bits: stats.original_bits,
            compressed_bits: stats.compressed_bits,
            header_bits: stats.header_bits,
            body_bits: stats.body_bits,
            compressed_bytes: stats.compressed_bytes(),
            leaf_count: stats.leaf_count,
            space_savings: stats.space_savings(),
            table: report.map(|rows| {
                rows.iter()
                    .map(|r| CodeJson::new(r.symbol, Some(r.frequency), &r.code))
                    .collect()
            }),
        }
    }
}

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    options: &CompressOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner(
        format!("Compressing {}", input.display()),
        options.progress && !options.quiet,
    );
    let result = compress(input, output, &options.config);
    spinner.finish_and_clear();
    let stats = result?;

    // Second read of the input; the file-level compress keeps its codes private.
    let report = if options.table {
        let data = fs::read(input)?;
        Some(HuffmanEncoder::new(options.config).report(&data)?)
    } else {
        None
    };

    if options.json {
        let json = CompressJson::new(input, output, &stats, report.as_deref());
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    if options.quiet {
        return Ok(());
    }

    println!("{} -> {}", input.display(), output.display());
    println!("Original size:   {} bits", stats.original_bits);
    println!(
        "Compressed size: {} bits ({} header + {} body)",
        stats.compressed_bits, stats.header_bits, stats.body_bits
    );
    println!("Space savings:   {:.2}%", stats.space_savings());

    if let Some(rows) = &report {
        println!();
        print_code_table(rows.iter().map(|r| (r.symbol, Some(r.frequency), &r.code)));
    }

    Ok(())
}
