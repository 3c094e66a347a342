use serde::Serialize;

use crate::io::read_input;
use b58::codec;
use b58::error::Result;
use b58::types::InputSource;

pub fn run_encode(input: &InputSource) -> Result<String> {
    let data = read_input(input)?;
    codec::encode(&data)
}

#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub schema_version: u32,
    pub codec: String,
    pub encoded: String,
    pub input_bytes: usize,
}

pub fn run_encode_json(input: &InputSource) -> Result<EncodeReport> {
    let data = read_input(input)?;
    let encoded = codec::encode(&data)?;

    Ok(EncodeReport {
        schema_version: 1,
        codec: "base58".to_string(),
        encoded,
        input_bytes: data.len(),
    })
}
