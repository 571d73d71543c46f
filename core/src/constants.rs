//! Engine status vocabulary and compression defaults.

/// zlib return codes, with their well-known numeric values.
/// Hosts see these integers; Rust callers use [`crate::ZStatus`].
pub mod status_codes {
    pub const Z_OK: i32            = 0;
    pub const Z_STREAM_END: i32    = 1;
    pub const Z_NEED_DICT: i32     = 2;
    pub const Z_ERRNO: i32         = -1;
    pub const Z_STREAM_ERROR: i32  = -2;
    pub const Z_DATA_ERROR: i32    = -3;
    pub const Z_MEM_ERROR: i32     = -4;
    pub const Z_BUF_ERROR: i32     = -5;
    pub const Z_VERSION_ERROR: i32 = -6;
}

/// Level used when no explicit level is configured (zlib's `Z_DEFAULT_COMPRESSION`).
pub const DEFAULT_LEVEL: u32 = 6;
/// Highest deflate level; larger requests are clamped.
pub const MAX_LEVEL: u32 = 9;

/// Fixed overhead of `deflateBound` for a zlib-wrapped stream
/// (block overhead plus the 2-byte header and 4-byte Adler-32 trailer).
pub const BOUND_OVERHEAD: usize = 13;

/// Fixed overhead of zlib's conservative bound, used when the engine runs
/// at a non-default level (block overhead plus the 6-byte zlib wrapper).
pub const CONSERVATIVE_BOUND_OVERHEAD: usize = 11;
