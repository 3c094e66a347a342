mod input;

pub use input::{read_input, read_text};
