//! Single-shot zlib compression via flate2.

use flate2::{Compress, FlushCompress, Status};
use tracing::{debug, trace};

use crate::compression::types::DeflateConfig;
use crate::types::ZlibError;
use crate::utils::{alloc_output, compress_bound_for_level};

/// Compress `input` into a zlib stream at the default level.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, ZlibError> {
    compress_with(input, &DeflateConfig::default())
}

/// Compress `input` into a zlib stream in one `Finish` call.
///
/// The output buffer is sized by [`compress_bound_for_level`], so the engine
/// always reaches stream end; any other outcome is reported as an error and
/// no partial output is returned.
pub fn compress_with(input: &[u8], config: &DeflateConfig) -> Result<Vec<u8>, ZlibError> {
    let level = config.effective_level();
    let mut stream = Compress::new(config.compression(), true);

    let bound = compress_bound_for_level(input.len(), level);
    let mut out = alloc_output(bound)?;
    trace!(input_len = input.len(), bound, level, "deflate pass");

    let status = stream.compress(input, &mut out[..bound], FlushCompress::Finish)
        .map_err(|e| {
            let err = ZlibError::from(e);
            debug!(status = err.status().name(), "deflate failed: {}", err);
            err
        })?;

    if status != Status::StreamEnd {
        let err = ZlibError::Incomplete { status: status.into() };
        debug!(status = err.status().name(), consumed = stream.total_in(), bound, "deflate did not finish");
        return Err(err);
    }

    out.truncate(stream.total_out() as usize);
    trace!(output_len = out.len(), "deflate stream end");
    Ok(out)
}
