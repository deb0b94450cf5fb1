//! Utility functions for the CLI.

use huffpack_codec::{Code, Symbol};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::time::Duration;

/// Map `-v` count and `-q` to a log level.
pub fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger.
pub fn init_logging(verbose: u8, quiet: bool) {
    if let Err(e) = TermLogger::init(
        log_level(verbose, quiet),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("warning: logging disabled: {}", e);
    }
}

/// Create a spinner on stderr, or a hidden one when disabled.
pub fn create_spinner(message: String, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// JSON form of one code table row.
#[derive(Debug, Serialize, Deserialize)]
pub struct CodeJson {
    pub symbol: u16,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u64>,
    pub code: String,
    pub bits: usize,
}

impl CodeJson {
    pub fn new(symbol: Symbol, frequency: Option<u64>, code: &Code) -> Self {
        Self {
            symbol: symbol.value(),
            display: symbol.to_string(),
            frequency,
            code: code.to_string(),
            bits: code.len(),
        }
    }
}

/// Print code table rows; frequencies are shown as `-` when unknown.
pub fn print_code_table<'a>(rows: impl IntoIterator<Item = (Symbol, Option<u64>, &'a Code)>) {
    println!("{:>8} {:>10} {:>5}  Code", "Symbol", "Frequency", "Bits");
    println!("{}", "-".repeat(40));

    let mut count = 0usize;
    for (symbol, frequency, code) in rows {
        let frequency = frequency.map_or_else(|| "-".to_string(), |f| f.to_string());
        println!(
            "{:>8} {:>10} {:>5}  {}",
            symbol.to_string(),
            frequency,
            code.len(),
            code
        );
        count += 1;
    }

    println!("{}", "-".repeat(40));
    println!("{} symbols", count);
}
