//! AVX2 marker scanner: 32 bytes per step.
//!
//! Each chunk is compared against the marker set with vector compares:
//! one unsigned range check for `0-9` and one equality compare per
//! punctuation marker. The OR of all compares is collapsed to a 32-bit mask
//! with `movemask`, and set bits are popped lowest-first so offsets come out
//! ascending. The last `len % 32` bytes go through the portable scanner.

use std::arch::x86_64::{
    __m256i, _mm256_and_si256, _mm256_cmpeq_epi8, _mm256_loadu_si256, _mm256_max_epu8,
    _mm256_min_epu8, _mm256_movemask_epi8, _mm256_or_si256, _mm256_set1_epi8,
};

use super::portable;

const LANES: usize = 32;

/// Punctuation bytes that are markers. Digits are handled by a range check.
const PUNCT_MARKERS: [u8; 7] = [b'"', b'\'', b'`', b'/', b'#', b'-', b'\\'];

/// Append the offsets of marker bytes in `sql` to `markers`.
///
/// # Safety
///
/// The caller must have verified that the CPU supports AVX2.
#[allow(
    unsafe_code,
    reason = "AVX2 intrinsics and unaligned vector loads require unsafe"
)]
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    reason = "bytes and lane masks are reinterpreted bit patterns"
)]
#[target_feature(enable = "avx2")]
pub(super) unsafe fn scan(sql: &[u8], markers: &mut Vec<usize>) {
    let zero = _mm256_set1_epi8(b'0' as i8);
    let nine = _mm256_set1_epi8(b'9' as i8);
    let mut punct = [zero; PUNCT_MARKERS.len()];
    for (slot, &b) in punct.iter_mut().zip(PUNCT_MARKERS.iter()) {
        *slot = _mm256_set1_epi8(b as i8);
    }

    let mut offset = 0;
    while offset + LANES <= sql.len() {
        // SAFETY: `offset + 32 <= sql.len()`, so the 32 bytes read are in
        // bounds. `loadu` has no alignment requirement.
        let chunk = _mm256_loadu_si256(sql.as_ptr().add(offset).cast::<__m256i>());

        // Unsigned range check: `b` is a digit iff max(b, '0') == b and
        // min(b, '9') == b.
        let mut hits = _mm256_and_si256(
            _mm256_cmpeq_epi8(_mm256_max_epu8(chunk, zero), chunk),
            _mm256_cmpeq_epi8(_mm256_min_epu8(chunk, nine), chunk),
        );
        for needle in punct {
            hits = _mm256_or_si256(hits, _mm256_cmpeq_epi8(chunk, needle));
        }

        let mut mask = _mm256_movemask_epi8(hits) as u32;
        while mask != 0 {
            markers.push(offset + mask.trailing_zeros() as usize);
            mask &= mask - 1;
        }

        offset += LANES;
    }

    portable::scan(sql, offset, markers);
}
