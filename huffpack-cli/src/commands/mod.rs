//! Command implementations for the huffpack CLI.

pub mod compress;
pub mod decompress;
pub mod info;

pub use compress::{CompressOptions, cmd_compress};
pub use decompress::cmd_decompress;
pub use info::cmd_info;
