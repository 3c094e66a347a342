use serde::Serialize;

use crate::io::read_text;
use b58::codec;
use b58::error::{B58Error, Result};
use b58::types::InputSource;

pub fn run_decode(input: &InputSource) -> Result<Vec<u8>> {
    let text = read_text(input)?;
    codec::decode(&text)
}

#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub schema_version: u32,
    pub codec: String,
    pub decoded: String,
    pub decoded_bytes: usize,
}

pub fn run_decode_json(input: &InputSource) -> Result<DecodeReport> {
    let decoded = run_decode(input)?;
    let decoded_bytes = decoded.len();
    let text = String::from_utf8(decoded).map_err(|_| B58Error::NonUtf8Output)?;

    Ok(DecodeReport {
        schema_version: 1,
        codec: "base58".to_string(),
        decoded: text,
        decoded_bytes,
    })
}
