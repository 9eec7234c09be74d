#[derive(Debug, Default)]
pub struct Header {
    pub version: u8,
    pub size: u32, // in bytes, goes up to 256 mb
}

#[derive(Debug, Default)]
pub struct FrameHeader {
    pub id: String,
    pub size: u32,
    // 2 flag bytes follow on disk; nothing here interprets them
}

// Where a frame's payload lives in the source.
// `pos` is the absolute offset of the first payload byte,
// `len` excludes the 10-byte frame header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCoordinates {
    pub len: u32,
    pub pos: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Text(String),
    Comment {
        language: String,
        description: String,
        text: String,
    },
    UnsynchronisedLyrics {
        language: String,
        description: String,
        lyrics: String,
    },
    Picture {
        mime: String,
        picture_type: u8,
        description: String,
        data: Vec<u8>,
    },
}
