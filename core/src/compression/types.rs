//! compression/types.rs
//! Engine status vocabulary, pass results and configuration.
use std::fmt;

use flate2::{Compression, Status};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::constants::{status_codes, DEFAULT_LEVEL, MAX_LEVEL};

/// zlib status codes as a closed enum.
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum ZStatus {
    Ok           = status_codes::Z_OK,
    StreamEnd    = status_codes::Z_STREAM_END,
    NeedDict     = status_codes::Z_NEED_DICT,
    Errno        = status_codes::Z_ERRNO,
    StreamError  = status_codes::Z_STREAM_ERROR,
    DataError    = status_codes::Z_DATA_ERROR,
    MemError     = status_codes::Z_MEM_ERROR,
    BufError     = status_codes::Z_BUF_ERROR,
    VersionError = status_codes::Z_VERSION_ERROR,
}

impl ZStatus {
    pub const ALL: [ZStatus; 9] = [
        ZStatus::Ok,
        ZStatus::StreamEnd,
        ZStatus::NeedDict,
        ZStatus::Errno,
        ZStatus::StreamError,
        ZStatus::DataError,
        ZStatus::MemError,
        ZStatus::BufError,
        ZStatus::VersionError,
    ];

    pub fn code(self) -> i32 {
        self.into()
    }

    /// The C constant name, e.g. `"Z_DATA_ERROR"`.
    pub fn name(self) -> &'static str {
        match self {
            ZStatus::Ok           => "Z_OK",
            ZStatus::StreamEnd    => "Z_STREAM_END",
            ZStatus::NeedDict     => "Z_NEED_DICT",
            ZStatus::Errno        => "Z_ERRNO",
            ZStatus::StreamError  => "Z_STREAM_ERROR",
            ZStatus::DataError    => "Z_DATA_ERROR",
            ZStatus::MemError     => "Z_MEM_ERROR",
            ZStatus::BufError     => "Z_BUF_ERROR",
            ZStatus::VersionError => "Z_VERSION_ERROR",
        }
    }

    /// Name for a raw code, `None` for codes outside the vocabulary.
    pub fn name_for(raw: i32) -> Option<&'static str> {
        ZStatus::try_from_primitive(raw).ok().map(ZStatus::name)
    }
}

impl fmt::Display for ZStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

impl From<Status> for ZStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok        => ZStatus::Ok,
            Status::BufError  => ZStatus::BufError,
            Status::StreamEnd => ZStatus::StreamEnd,
        }
    }
}

/// Output of a successful decompression pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inflated {
    /// Decompressed bytes.
    pub data: Vec<u8>,
    /// Compressed bytes the stream actually used; trailing input is not counted.
    pub consumed: usize,
}

impl Inflated {
    pub fn into_parts(self) -> (Vec<u8>, usize) {
        (self.data, self.consumed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeflateConfig {
    /// Deflate level 0..=9; larger values are clamped to 9.
    /// - `None` → engine default (level 6).
    pub level: Option<u32>,
}

impl DeflateConfig {
    pub fn new(level: Option<u32>) -> Self {
        Self { level }
    }

    pub fn effective_level(&self) -> u32 {
        self.level.map_or(DEFAULT_LEVEL, |l| l.min(MAX_LEVEL))
    }

    pub(crate) fn compression(&self) -> Compression {
        Compression::new(self.effective_level())
    }
}
