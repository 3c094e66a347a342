use std::fs::File;
use std::io::{self, Read};

use b58::error::{B58Error, Result};
use b58::types::InputSource;

pub fn read_input(source: &InputSource) -> Result<Vec<u8>> {
    match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        InputSource::File(path) => {
            let mut file = File::open(path)?;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            Ok(buf)
        }
        InputSource::Literal(text) => Ok(text.as_bytes().to_vec()),
    }
}

pub fn read_text(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Literal(text) => Ok(text.clone()),
        source => {
            let bytes = read_input(source)?;
            let mut text = String::from_utf8(bytes).map_err(|_| B58Error::NonUtf8Input)?;
            // Piped and file input usually ends with a newline that is not
            // part of the encoded payload.
            while text.ends_with('\n') || text.ends_with('\r') {
                text.pop();
            }
            Ok(text)
        }
    }
}
