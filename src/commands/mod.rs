mod check;
mod decode;
mod encode;

pub use check::{run_check, CheckReport};
pub use decode::{run_decode, run_decode_json, DecodeReport};
pub use encode::{run_encode, run_encode_json, EncodeReport};

use std::process::ExitCode;

use b58::error::{B58Error, Result};
use b58::types::InputSource;

pub trait CommandHandler {
    fn execute(&self) -> Result<ExitCode>;
}

pub struct EncodeCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for EncodeCommand {
    fn execute(&self) -> Result<ExitCode> {
        if self.json {
            let report = run_encode_json(&self.input)?;
            println!("{}", serde_json::to_string(&report).unwrap());
            return Ok(ExitCode::SUCCESS);
        }

        let encoded = run_encode(&self.input)?;
        println!("{}", encoded);
        Ok(ExitCode::SUCCESS)
    }
}

pub struct DecodeCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for DecodeCommand {
    fn execute(&self) -> Result<ExitCode> {
        if self.json {
            let report = run_decode_json(&self.input)?;
            println!("{}", serde_json::to_string(&report).unwrap());
            return Ok(ExitCode::SUCCESS);
        }

        let decoded = run_decode(&self.input)?;
        let text = String::from_utf8(decoded).map_err(|_| B58Error::NonUtf8Output)?;
        println!("{}", text);
        Ok(ExitCode::SUCCESS)
    }
}

pub struct CheckCommand {
    pub input: InputSource,
    pub json: bool,
}

impl CommandHandler for CheckCommand {
    fn execute(&self) -> Result<ExitCode> {
        let report = run_check(&self.input)?;

        if self.json {
            println!("{}", serde_json::to_string(&report).unwrap());
            return Ok(ExitCode::SUCCESS);
        }

        if report.valid {
            println!("valid");
            Ok(ExitCode::SUCCESS)
        } else {
            println!("invalid: {}", report.error.as_deref().unwrap_or_default());
            Ok(ExitCode::FAILURE)
        }
    }
}
