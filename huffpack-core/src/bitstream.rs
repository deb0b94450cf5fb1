//! Bit-level I/O for the huffpack stream format.
//!
//! This module provides `BitReader` and `BitWriter` for reading and writing
//! data at the bit level over any `Read`/`Write` implementation.
//!
//! # Bit Ordering
//!
//! huffpack uses MSB-first (Most Significant Bit first) ordering: within each
//! `write_bits`/`read_bits` call the most significant bit of the value is
//! transferred first, and within each byte the first bit occupies bit 7.
//! The final partial byte of a stream is padded with zero bits.
//!
//! # Example
//!
//! ```
//! use huffpack_core::bitstream::{BitReader, BitWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0b1100, 4).unwrap();
//!     writer.flush().unwrap();
//! }
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{HuffpackError, Result};
use std::io::{ErrorKind, Read, Write};

/// Largest field a single `read_bits`/`write_bits` call can carry.
pub const MAX_FIELD_BITS: u8 = 32;

#[inline]
fn low_mask(count: u8) -> u64 {
    (1u64 << count).wrapping_sub(1)
}

/// An MSB-first bit reader that wraps any `Read` implementation.
///
/// Bytes are pulled from the underlying reader one at a time and only when a
/// read actually needs them, so the reader never consumes more input than
/// the bits requested so far (rounded up to whole bytes). Wrap slow sources
/// in a `BufReader`.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer; valid bits are the low `bits_in_buffer` bits, oldest first.
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits consumed (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    ///
    /// Bits left in the partially consumed byte are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Ensure at least `count` bits are available in the buffer.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count {
            match self.next_byte()? {
                Some(byte) => {
                    self.buffer = (self.buffer << 8) | byte as u64;
                    self.bits_in_buffer += 8;
                }
                None => return Err(HuffpackError::unexpected_eof(self.total_bits_read)),
            }
        }
        Ok(())
    }

    /// Read up to 32 bits from the stream.
    ///
    /// The first bit read ends up in the most significant position of the
    /// returned value.
    #[inline]
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= MAX_FIELD_BITS, "Cannot read more than 32 bits at once");

        if count == 0 {
            return Ok(0);
        }

        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let value = (self.buffer >> shift) & low_mask(count);

        self.bits_in_buffer = shift;
        self.buffer &= low_mask(shift);
        self.total_bits_read += count as u64;

        Ok(value as u32)
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }
}

/// An MSB-first bit writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits and hands complete bytes to the underlying
/// writer. Call [`BitWriter::flush`] or [`BitWriter::finish`] when done so the
/// last partial byte is written (zero padded).
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer; pending bits are the low `bits_in_buffer` bits, oldest first.
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written, padding excluded.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get the total number of bits written so far (padding excluded).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            let byte = (self.buffer >> self.bits_in_buffer) as u8;
            self.writer.write_all(&[byte])?;
        }
        self.buffer &= low_mask(self.bits_in_buffer);
        Ok(())
    }

    /// Write the low `count` bits of `value` (up to 32), most significant first.
    #[inline]
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        debug_assert!(count <= MAX_FIELD_BITS, "Cannot write more than 32 bits at once");

        if count == 0 {
            return Ok(());
        }

        let value = value as u64 & low_mask(count);
        self.buffer = (self.buffer << count) | value;
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.buffer = (self.buffer << 1) | bit as u64;
        self.bits_in_buffer += 1;
        self.total_bits_written += 1;

        if self.bits_in_buffer >= 8 {
            self.flush_bytes()?;
        }
        Ok(())
    }

    /// Pad to the next byte boundary with zero bits.
    ///
    /// Padding is not counted in [`BitWriter::bits_written`].
    pub fn align_to_byte(&mut self) -> Result<()> {
        let remainder = self.bits_in_buffer % 8;
        if remainder != 0 {
            let padding = 8 - remainder;
            self.buffer <<= padding;
            self.bits_in_buffer += padding;
            self.flush_bytes()?;
        }
        Ok(())
    }

    /// Write out any pending bits (zero padded) and flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.align_to_byte()?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_bitreader_basic() {
        // 0b10110101 = 0xB5
        let data = vec![0xB5];
        let mut reader = BitReader::new(Cursor::new(data));

        assert!(reader.read_bit().unwrap()); // MSB first
        assert!(!reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.read_bits(4).unwrap(), 0b0101);
        assert_eq!(reader.bits_read(), 8);
    }

    #[test]
    fn test_bitreader_crosses_bytes() {
        let data = vec![0xFF, 0x00, 0xAB];
        let mut reader = BitReader::new(Cursor::new(data));

        assert_eq!(reader.read_bits(4).unwrap(), 0xF);
        assert_eq!(reader.read_bits(8).unwrap(), 0xF0); // Crosses byte boundary
        assert_eq!(reader.read_bits(12).unwrap(), 0x0AB);
    }

    #[test]
    fn test_bitreader_full_word() {
        let data = 1998u32.to_be_bytes().to_vec();
        let mut reader = BitReader::new(Cursor::new(data));
        assert_eq!(reader.read_bits(32).unwrap(), 1998);
    }

    #[test]
    fn test_bitreader_eof() {
        let mut reader = BitReader::new(Cursor::new(vec![0xAA]));
        reader.read_bits(6).unwrap();
        let err = reader.read_bits(3).unwrap_err();
        assert!(matches!(
            err,
            HuffpackError::UnexpectedEof { bit_position: 6 }
        ));
    }

    #[test]
    fn test_bitreader_reads_only_needed_bytes() {
        let mut reader = BitReader::new(Cursor::new(vec![0x80, 0x11, 0x22]));
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.get_ref().position(), 1);
    }

    #[test]
    fn test_bitwriter_basic() {
        let mut output = Vec::new();
        {
            let mut writer = BitWriter::new(&mut output);
            for bit in [true, false, true, true, false, true, false, true] {
                writer.write_bit(bit).unwrap();
            }
            writer.flush().unwrap();
        }
        assert_eq!(output, vec![0xB5]);
    }

    #[test]
    fn test_bitwriter_padding() {
        let mut output = Vec::new();
        let mut writer = BitWriter::new(&mut output);
        writer.write_bits(0b1, 1).unwrap();
        writer.write_bits(0b011, 3).unwrap();
        assert_eq!(writer.bits_written(), 4);
        writer.finish().unwrap();
        assert_eq!(output, vec![0b1011_0000]);
    }

    #[test]
    fn test_bitwriter_masks_extra_bits() {
        let mut output = Vec::new();
        let mut writer = BitWriter::new(&mut output);
        writer.write_bits(0xFFFF_FF00, 8).unwrap();
        writer.finish().unwrap();
        assert_eq!(output, vec![0x00]);
    }

    #[test]
    fn test_header_fields_layout() {
        // 32-bit magic followed by a 9-bit field, as the stream header does.
        let mut output = Vec::new();
        let mut writer = BitWriter::new(&mut output);
        writer.write_bits(1998, 32).unwrap();
        writer.write_bits(257, 9).unwrap();
        assert_eq!(writer.bits_written(), 41);
        writer.finish().unwrap();

        assert_eq!(&output[..4], &1998u32.to_be_bytes());
        assert_eq!(output[4], 0b1000_0000);
        assert_eq!(output[5], 0b1000_0000);
    }

    #[test]
    fn test_roundtrip() {
        let mut output = Vec::new();
        {
            let mut writer = BitWriter::new(&mut output);
            writer.write_bits(0b101, 3).unwrap();
            writer.write_bits(0xDEAD_BEEF, 32).unwrap();
            writer.write_bits(0b10, 2).unwrap();
            writer.write_bits(256, 9).unwrap();
            writer.flush().unwrap();
        }

        let mut reader = BitReader::new(Cursor::new(&output));
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(32).unwrap(), 0xDEAD_BEEF);
        assert_eq!(reader.read_bits(2).unwrap(), 0b10);
        assert_eq!(reader.read_bits(9).unwrap(), 256);
    }
}
