use std::sync::OnceLock;

use super::base58::encode_unchecked;

pub const MAX_ENCODE_LEN: usize = 2048;

static MAX_DECODE_LEN: OnceLock<usize> = OnceLock::new();

/// Longest decodable string: the encoded length of a maximum-length
/// payload. Derived from `MAX_ENCODE_LEN` on first use and cached.
pub fn max_decode_len() -> usize {
    *MAX_DECODE_LEN.get_or_init(|| encode_unchecked(&[0x61; MAX_ENCODE_LEN]).len())
}
