pub mod codec;
pub mod error;
pub mod types;

pub use codec::{decode, encode, is_valid, max_decode_len, validate, ALPHABET, MAX_ENCODE_LEN};
pub use error::{B58Error, Result};
pub use types::InputSource;
