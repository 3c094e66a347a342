use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Literal(String),
}

impl InputSource {
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => InputSource::Stdin,
            s if s.starts_with('@') => InputSource::File(PathBuf::from(&s[1..])),
            s => {
                if Self::looks_like_path(s) {
                    eprintln!("Warning: treating '{}' as literal data. Use @{} to read from file.", s, s);
                }
                InputSource::Literal(s.to_string())
            }
        }
    }

    fn looks_like_path(s: &str) -> bool {
        if s.contains('/') || s.contains('\\') {
            return true;
        }
        let extensions = [".txt", ".bin", ".dat", ".json", ".xml", ".csv", ".log"];
        extensions.iter().any(|ext| s.ends_with(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stdin() {
        assert!(matches!(InputSource::parse("-"), InputSource::Stdin));
    }

    #[test]
    fn test_parse_file() {
        match InputSource::parse("@data.txt") {
            InputSource::File(path) => assert_eq!(path, PathBuf::from("data.txt")),
            other => panic!("expected file source, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_literal() {
        match InputSource::parse("JxF12TrwUP45BMd") {
            InputSource::Literal(text) => assert_eq!(text, "JxF12TrwUP45BMd"),
            other => panic!("expected literal source, got {:?}", other),
        }
    }
}
