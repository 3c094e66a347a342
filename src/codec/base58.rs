use super::limits::{max_decode_len, MAX_ENCODE_LEN};
use crate::error::{B58Error, Result};

pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub fn encode(input: &[u8]) -> Result<String> {
    if input.len() > MAX_ENCODE_LEN {
        return Err(B58Error::length_exceeded(input.len(), MAX_ENCODE_LEN));
    }
    Ok(encode_unchecked(input))
}

pub(super) fn encode_unchecked(input: &[u8]) -> String {
    if input.is_empty() {
        return String::new();
    }

    let alphabet = ALPHABET.as_bytes();
    let mut num = input.iter().fold(Vec::new(), |mut acc, &byte| {
        let mut carry = byte as u32;
        for digit in acc.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            acc.push((carry % 58) as u8);
            carry /= 58;
        }
        acc
    });

    // Leading zero bytes carry no magnitude; each maps to one '1' digit.
    let leading_zeros = input.iter().take_while(|&&b| b == 0).count();
    num.extend(std::iter::repeat_n(0, leading_zeros));

    num.iter().rev().map(|&d| alphabet[d as usize] as char).collect()
}

pub fn decode(input: &str) -> Result<Vec<u8>> {
    let length = input.chars().count();
    let limit = max_decode_len();
    if length > limit {
        return Err(B58Error::length_exceeded(length, limit));
    }

    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut digits = Vec::with_capacity(length);
    for (position, ch) in input.chars().enumerate() {
        match ALPHABET.find(ch) {
            Some(value) => digits.push(value as u32),
            None => return Err(B58Error::invalid_char(ch, position)),
        }
    }

    let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();

    let mut result = digits.iter().fold(Vec::new(), |mut acc, &digit| {
        let mut carry = digit;
        for byte in acc.iter_mut().rev() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            acc.insert(0, (carry & 0xff) as u8);
            carry >>= 8;
        }
        acc
    });

    let mut output = vec![0u8; leading_zeros];
    output.append(&mut result);
    Ok(output)
}

pub fn validate(input: &str) -> Result<()> {
    for (position, ch) in input.chars().enumerate() {
        if !ALPHABET.contains(ch) {
            return Err(B58Error::invalid_char(ch, position));
        }
    }
    Ok(())
}

pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}
