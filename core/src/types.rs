use flate2::{CompressError, DecompressError};
use thiserror::Error;

use crate::compression::ZStatus;

/// Failure of a single compress/decompress pass.
///
/// Every variant maps onto exactly one engine status through
/// [`ZlibError::status`]; that integer is what a host runtime sees.
#[derive(Debug, Error)]
pub enum ZlibError {
    /// The output buffer could not be allocated.
    #[error("cannot allocate {requested}-byte output buffer")]
    OutOfMemory { requested: usize },

    /// The single `Finish` call returned without reaching stream end
    /// (output space exhausted or input truncated).
    #[error("stream did not end in a single pass ({status})")]
    Incomplete { status: ZStatus },

    /// The stream was built against a preset dictionary.
    #[error("stream requires a preset dictionary (adler32 {adler:#010x})")]
    NeedDict { adler: u32 },

    /// Corrupt or non-zlib input.
    #[error("invalid compressed data: {msg}")]
    Data { msg: String },

    /// The engine rejected the call itself.
    #[error("stream state error: {msg}")]
    Stream { msg: String },
}

impl ZlibError {
    pub fn status(&self) -> ZStatus {
        match self {
            ZlibError::OutOfMemory { .. } => ZStatus::MemError,
            ZlibError::Incomplete { status } => *status,
            ZlibError::NeedDict { .. } => ZStatus::NeedDict,
            ZlibError::Data { .. } => ZStatus::DataError,
            ZlibError::Stream { .. } => ZStatus::StreamError,
        }
    }

    /// Raw status integer for host runtimes.
    pub fn code(&self) -> i32 {
        self.status().code()
    }
}

impl From<CompressError> for ZlibError {
    fn from(e: CompressError) -> Self {
        ZlibError::Stream { msg: e.to_string() }
    }
}

impl From<DecompressError> for ZlibError {
    fn from(e: DecompressError) -> Self {
        match e.needs_dictionary() {
            Some(adler) => ZlibError::NeedDict { adler },
            None => ZlibError::Data { msg: e.to_string() },
        }
    }
}
