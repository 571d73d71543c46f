//! compression/mod.rs
//! Single-shot zlib passes over whole buffers.
//!
//! Notes:
//! - Each call owns its stream context; nothing is shared or reused between calls.
//! - Decompression needs the exact uncompressed size up front and reports how
//!   much input the stream used, so callers can walk records packed back to back.

pub mod types;
pub mod deflate;
pub mod inflate;

pub use types::*;
pub use deflate::*;
pub use inflate::*;
