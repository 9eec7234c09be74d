pub mod encoding;

use crate::Error;
pub fn decode_error(err: &str) -> Error {
    Error::DecodeError(err.to_string())
}

// ID3v2.3 frame sizes are plain big-endian, unlike everything else in the tag
pub fn decode_int_be_u32(input: &[u8]) -> u32 {
    if input.len() > 4 {
        panic!(
            "decode_int_be_u32 expected a slice with max length 4, got slice with length {}",
            input.len()
        );
    }
    input.iter().fold(0, |acc, &b| (acc << 8) | u32::from(b))
}
