use serde::Serialize;

use crate::io::read_text;
use b58::codec;
use b58::error::Result;
use b58::types::InputSource;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub schema_version: u32,
    pub codec: String,
    pub valid: bool,
    pub error: Option<String>,
}

pub fn run_check(input: &InputSource) -> Result<CheckReport> {
    let text = read_text(input)?;

    match codec::validate(&text) {
        Ok(()) => Ok(CheckReport {
            schema_version: 1,
            codec: "base58".to_string(),
            valid: true,
            error: None,
        }),
        Err(e) => Ok(CheckReport {
            schema_version: 1,
            codec: "base58".to_string(),
            valid: false,
            error: Some(e.to_string()),
        }),
    }
}
