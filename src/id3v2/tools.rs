// A synchsafe integer keeps the top bit of every byte clear, leaving
// 7 usable bits per byte, most significant byte first.
// Any 4-byte input decodes to something in [0, 2^28 - 1].
pub fn decode_synch_int(input: &[u8]) -> u32 {
    input
        .iter()
        .fold(0, |acc, &b| (acc << 7) | u32::from(b & 0x7F))
}

pub fn encode_synch_int(input: u32) -> [u8; 4] {
    [
        ((input >> 21) & 0x7F) as u8,
        ((input >> 14) & 0x7F) as u8,
        ((input >> 7) & 0x7F) as u8,
        (input & 0x7F) as u8,
    ]
}
