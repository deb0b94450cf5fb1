//! Path-based compression, decompression and inspection.
//!
//! Inputs are opened and read before the output is created, so an input that
//! fails validation (empty, wrong magic number) never leaves a file behind.
//! A failure after the output was created removes the partial file.

use crate::body::decode_body;
use crate::config::CodecConfig;
use crate::decoder::{HeaderInfo, HuffmanDecoder};
use crate::encoder::{CompressStats, HuffmanEncoder};
use huffpack_core::bitstream::BitReader;
use huffpack_core::error::{HuffpackError, Result};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| HuffpackError::input_not_found(path, e))?;
    Ok(BufReader::new(file))
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut reader = open_input(path)?;
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Create `path`, run `write` against it and flush.
///
/// On failure the partly written file is deleted.
fn write_output<T>(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> Result<T>,
) -> Result<T> {
    let file = File::create(path).map_err(|e| HuffpackError::output_not_writable(path, e))?;
    let mut output = BufWriter::new(file);

    let result = write(&mut output).and_then(|value| {
        output.flush()?;
        Ok(value)
    });

    if result.is_err() {
        drop(output);
        if let Err(e) = fs::remove_file(path) {
            warn!("could not remove partial output {}: {}", path.display(), e);
        }
    }
    result
}

/// Compress the file at `input` into a new file at `output`.
///
/// # Example
///
/// ```no_run
/// use huffpack_codec::{compress, CodecConfig};
///
/// let stats = compress("notes.txt", "notes.huf", &CodecConfig::default()).unwrap();
/// println!("saved {:.2}%", stats.space_savings());
/// ```
pub fn compress(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &CodecConfig,
) -> Result<CompressStats> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let data = read_input(input)?;

    let encoder = HuffmanEncoder::new(*config);
    let plan = encoder.plan(&data)?;

    let stats = write_output(output, |out| encoder.write_plan(&plan, &data, out))?;
    info!(
        "{} -> {}: {} -> {} bytes",
        input.display(),
        output.display(),
        data.len(),
        stats.compressed_bytes()
    );
    Ok(stats)
}

/// Decompress the file at `input` into a new file at `output`.
///
/// Fails with `FormatMismatch` without creating `output` when the input does
/// not start with the configured magic number.
pub fn decompress(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &CodecConfig,
) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let mut reader = BitReader::new(open_input(input)?);
    let tree = HuffmanDecoder::new(*config).read_tree(&mut reader)?;

    let written = write_output(output, |out| decode_body(&mut reader, &tree, out))?;
    info!(
        "{} -> {}: {} bytes restored",
        input.display(),
        output.display(),
        written
    );
    Ok(())
}

/// Read the header of the compressed file at `path`.
pub fn inspect(path: impl AsRef<Path>, config: &CodecConfig) -> Result<HeaderInfo> {
    let reader = open_input(path.as_ref())?;
    HuffmanDecoder::new(*config).read_header(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "huffpack_file_{}_{}",
            std::process::id(),
            name
        ))
    }

    #[test]
    fn test_write_output_removes_file_on_error() {
        let path = temp_path("partial.out");
        let result: Result<()> = write_output(&path, |out| {
            out.write_all(b"partial")?;
            Err(HuffpackError::malformed_tree("stop"))
        });
        assert!(matches!(result, Err(HuffpackError::MalformedTree { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_output_keeps_file_on_success() {
        let path = temp_path("complete.out");
        write_output(&path, |out| {
            out.write_all(b"complete")?;
            Ok(())
        })
        .unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"complete");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_input() {
        let path = temp_path("does_not_exist.txt");
        let err = read_input(&path).unwrap_err();
        match err {
            HuffpackError::InputNotFound { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
