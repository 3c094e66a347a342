mod base58;
mod limits;

pub use base58::{decode, encode, is_valid, validate, ALPHABET};
pub use limits::{max_decode_len, MAX_ENCODE_LEN};
