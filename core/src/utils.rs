use crate::constants::{BOUND_OVERHEAD, CONSERVATIVE_BOUND_OVERHEAD, DEFAULT_LEVEL};
use crate::types::ZlibError;

/// Worst-case size of a zlib stream produced from `len` input bytes.
///
/// Same formula as zlib's `deflateBound` for the default window and memory
/// level. Saturates instead of overflowing; a saturated bound simply fails
/// allocation.
pub fn compress_bound(len: usize) -> usize {
    len.saturating_add(len >> 12)
        .saturating_add(len >> 14)
        .saturating_add(len >> 25)
        .saturating_add(BOUND_OVERHEAD)
}

/// Worst-case output size for `len` input bytes at deflate `level`.
///
/// The tight `deflateBound` formula only holds for the default level; the
/// fast levels may emit more block overhead on incompressible input, so
/// every other level gets zlib's conservative bound
/// (`n + n/8 + n/64 + 11`, rounded up).
pub fn compress_bound_for_level(len: usize, level: u32) -> usize {
    if level == DEFAULT_LEVEL {
        return compress_bound(len);
    }
    len.saturating_add(len.saturating_add(7) >> 3)
        .saturating_add(len.saturating_add(63) >> 6)
        .saturating_add(CONSERVATIVE_BOUND_OVERHEAD)
}

/// Allocate a zeroed buffer of exactly `len` bytes.
///
/// The engine is handed `&mut buf[..]`, so it can never write past `len`
/// whatever capacity the allocator hands back.
pub fn alloc_output(len: usize) -> Result<Vec<u8>, ZlibError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| ZlibError::OutOfMemory { requested: len })?;
    buf.resize(len, 0);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_of_empty_input_is_the_fixed_overhead() {
        assert_eq!(compress_bound(0), BOUND_OVERHEAD);
    }

    #[test]
    fn bound_matches_zlib_formula() {
        // 1 MiB: 1048576 + 256 + 64 + 0 + 13
        assert_eq!(compress_bound(1 << 20), 1_048_909);
        assert_eq!(compress_bound(11), 24);
    }

    #[test]
    fn bound_saturates() {
        assert_eq!(compress_bound(usize::MAX), usize::MAX);
    }

    #[test]
    fn bound_for_default_level_is_the_tight_bound() {
        assert_eq!(compress_bound_for_level(65_536, DEFAULT_LEVEL), compress_bound(65_536));
    }

    #[test]
    fn bound_for_fast_levels_leaves_block_slack() {
        // 65536 + 8192 + 1024 + 11
        assert_eq!(compress_bound_for_level(65_536, 1), 74_763);
        assert_eq!(compress_bound_for_level(0, 0), CONSERVATIVE_BOUND_OVERHEAD);
        for level in 0..=9 {
            assert!(compress_bound_for_level(100_000, level) >= compress_bound(100_000));
        }
        assert_eq!(compress_bound_for_level(usize::MAX, 1), usize::MAX);
    }

    #[test]
    fn alloc_output_has_exact_length() {
        let buf = alloc_output(100).unwrap();
        assert_eq!(buf.len(), 100);
        assert!(buf.iter().all(|&b| b == 0));
        assert!(alloc_output(0).unwrap().is_empty());
    }

    #[test]
    fn alloc_output_reports_out_of_memory() {
        match alloc_output(usize::MAX) {
            Err(ZlibError::OutOfMemory { requested }) => assert_eq!(requested, usize::MAX),
            other => panic!("expected OutOfMemory, got {:?}", other),
        }
    }
}
