//! Single-shot zlib decompression via flate2.

use flate2::{Decompress, FlushDecompress, Status};
use tracing::{debug, trace};

use crate::compression::types::Inflated;
use crate::types::ZlibError;
use crate::utils::alloc_output;

/// Decompress one zlib stream from the front of `input`.
///
/// `expected_len` is the uncompressed size recorded by the caller's framing.
/// The engine writes into exactly `expected_len` bytes, so a smaller value
/// fails with `Z_BUF_ERROR` instead of truncating. A larger value is
/// tolerated and `data` holds only the produced bytes.
///
/// Bytes after the end of the stream are left alone; [`Inflated::consumed`]
/// tells the caller where the next record starts.
pub fn decompress(input: &[u8], expected_len: usize) -> Result<Inflated, ZlibError> {
    let mut stream = Decompress::new(true);

    let mut out = alloc_output(expected_len)?;
    trace!(input_len = input.len(), expected_len, "inflate pass");

    let status = stream.decompress(input, &mut out[..expected_len], FlushDecompress::Finish)
        .map_err(|e| {
            let err = ZlibError::from(e);
            debug!(status = err.status().name(), "inflate failed: {}", err);
            err
        })?;

    if status != Status::StreamEnd {
        let err = ZlibError::Incomplete { status: status.into() };
        debug!(
            status = err.status().name(),
            produced = stream.total_out(),
            expected_len,
            "inflate did not finish"
        );
        return Err(err);
    }

    out.truncate(stream.total_out() as usize);
    let consumed = stream.total_in() as usize;
    trace!(output_len = out.len(), consumed, "inflate stream end");
    Ok(Inflated { data: out, consumed })
}
