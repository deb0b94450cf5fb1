//! Codec configuration.

/// Width in bits of the magic number field.
pub const MAGIC_BITS: u8 = 32;

/// Width in bits of the leaf count field (enough for 1..=257).
pub const LEAF_COUNT_BITS: u8 = 9;

/// Per-call codec configuration.
///
/// Passed explicitly into every encode/decode so that calls share no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Program identifier written as the first 32 bits of every stream.
    /// The decoder rejects streams that start with any other value.
    pub magic: u32,
}

impl CodecConfig {
    /// The identifier written by default.
    pub const DEFAULT_MAGIC: u32 = 1998;

    /// Standard configuration.
    pub const STANDARD: Self = Self {
        magic: Self::DEFAULT_MAGIC,
    };

    /// Create a configuration with a custom magic number.
    pub fn with_magic(magic: u32) -> Self {
        Self { magic }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.magic, 1998);
        assert_eq!(config, CodecConfig::STANDARD);
    }

    #[test]
    fn test_custom_magic() {
        assert_eq!(CodecConfig::with_magic(0xCAFE_F00D).magic, 0xCAFE_F00D);
    }

    #[test]
    fn test_field_widths() {
        // 9 bits must hold every leaf count up to the full alphabet.
        let max_leaf_count = (1u32 << LEAF_COUNT_BITS) - 1;
        assert_eq!(max_leaf_count, 511);
        assert_eq!(MAGIC_BITS, 32);
    }
}
