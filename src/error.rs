use thiserror::Error;

#[derive(Debug, Error)]
pub enum B58Error {
    #[error("input length {length} exceeds maximum of {limit}")]
    LengthExceeded { length: usize, limit: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("input is not valid UTF-8 text")]
    NonUtf8Input,

    #[error("decoded data is not valid UTF-8")]
    NonUtf8Output,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl B58Error {
    // Helper constructors for common error patterns
    pub fn length_exceeded(length: usize, limit: usize) -> Self {
        Self::LengthExceeded { length, limit }
    }

    pub fn invalid_char(character: char, position: usize) -> Self {
        Self::InvalidCharacter { character, position }
    }
}

pub type Result<T> = std::result::Result<T, B58Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_exceeded_display() {
        let err = B58Error::length_exceeded(2049, 2048);
        assert_eq!(err.to_string(), "input length 2049 exceeds maximum of 2048");
    }

    #[test]
    fn test_invalid_character_display() {
        let err = B58Error::invalid_char('!', 7);
        assert_eq!(err.to_string(), "invalid character '!' at position 7");
    }
}
