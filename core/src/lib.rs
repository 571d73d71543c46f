//! packflate-core
//!
//! Single-shot zlib compression for callers that already know the
//! uncompressed size of a record (packfile readers and the like).
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod compression;

pub use compression::{compress, compress_with, decompress, DeflateConfig, Inflated, ZStatus};
pub use types::ZlibError;
pub use utils::{compress_bound, compress_bound_for_level};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{compress, compress_with, decompress, DeflateConfig, Inflated, ZStatus};
    pub use crate::types::ZlibError;
    pub use crate::utils::{compress_bound, compress_bound_for_level};
}
