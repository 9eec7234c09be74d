use std;

use std::io::prelude::*;

use crate::id3v2::regex::normalize_language;
use crate::id3v2::structure::{Frame, FrameHeader, Header};
use crate::id3v2::tools::decode_synch_int;
use crate::tools::decode_error;
use crate::tools::decode_int_be_u32;
use crate::tools::encoding::*;
use crate::Error;

// Reads the fixed 10-byte tag header. A source that is too short or
// doesn't start with the magic bytes has no tag at all, which is not
// an error - the caller gets None and should treat the tag as empty.
pub fn header<T: Read + Seek>(input: &mut T) -> Result<Option<Header>, Error> {
    input.seek(std::io::SeekFrom::Start(0))?;

    let mut arr: [u8; 10] = [0; 10];
    if let Err(e) = input.read_exact(&mut arr) {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            return Ok(None);
        }
        return Err(Error::IOError(e));
    }

    // ID3v2/file identifier      "ID3"
    if &arr[0..3] != b"ID3" {
        return Ok(None);
    }

    // ID3v2 version              $0X 00
    let version = arr[3];
    if version < 3 || version > 4 {
        return Err(Error::UnsupportedVersion(version));
    }

    // arr[4] is the revision and arr[5] the tag flags; neither changes
    // where the frames live, so both are skipped here

    Ok(Some(Header {
        version,
        size: decode_synch_int(&arr[6..10]),
    }))
}

// 4: Frame ID      $xx xx xx xx  (four characters)
// 4: Size      4 * %0xxxxxxx in 2.4 / $xx in 2.3
// 2: Flags         $xx xx
//
// Returns Ok(None) when the cursor has run into the padding that
// fills out the rest of the declared tag size.
pub fn frame_header<T: Read>(input: &mut T, version: u8) -> Result<Option<FrameHeader>, Error> {
    let mut arr: [u8; 4 + 4 + 2] = [0; 10];
    if let Err(e) = input.read_exact(&mut arr) {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            return Err(Error::TruncatedFrameHeader);
        }
        return Err(Error::IOError(e));
    }

    if arr[0] == 0x00 {
        return Ok(None);
    }

    let size = match version {
        3 => decode_int_be_u32(&arr[4..8]),
        _ => decode_synch_int(&arr[4..8]),
    };

    // identifiers are not validated here - unknown ones still get indexed
    Ok(Some(FrameHeader {
        id: String::from_utf8_lossy(&arr[0..4]).into_owned(),
        size,
    }))
}

fn decode_string(encoding: u8, input: &[u8]) -> String {
    match encoding {
        0x00 => decode_iso_8859_1(input),
        0x01 | 0x02 => decode_utf16(input),
        _ => decode_utf8(input),
    }
}

// Splits off the leading null-terminated string of a payload.
// The terminator depends on the declared encoding: the UTF-16 flavours
// end on an aligned double zero, the byte encodings on a single zero.
// A missing terminator makes the whole input the head.
fn split_terminated(encoding: u8, input: &[u8]) -> (&[u8], &[u8]) {
    match encoding {
        0x01 | 0x02 => {
            let mut i = 0;
            while i + 1 < input.len() {
                if input[i] == 0x00 && input[i + 1] == 0x00 {
                    return (&input[..i], &input[i + 2..]);
                }
                i += 2;
            }
            (input, &[])
        }
        _ => match input.iter().position(|&b| b == 0x00) {
            Some(i) => (&input[..i], &input[i + 1..]),
            None => (input, &[]),
        },
    }
}

// Text frames: encoding byte, then text.
// Embedded nulls separate multiple values, so join them readably.
pub fn text(input: &mut dyn Read) -> Result<Frame, Error> {
    let mut vec = Vec::new();
    input.read_to_end(&mut vec)?;

    if vec.is_empty() {
        return Err(decode_error("Text frame carries no encoding byte"));
    }

    Ok(Frame::Text(
        decode_string(vec[0], &vec[1..]).replace("\0", " / "),
    ))
}

// Comments and unsynchronised lyrics share one wire shape:
// encoding byte, 3-byte language, null-terminated description, body.
fn language_frame(input: &mut dyn Read, kind: &str) -> Result<(String, String, String), Error> {
    let mut vec = Vec::new();
    input.read_to_end(&mut vec)?;

    if vec.len() < 4 {
        return Err(decode_error(&format!(
            "{} frame is shorter than its fixed fields",
            kind
        )));
    }

    let encoding = vec[0];
    let language = normalize_language(&decode_iso_8859_1(&vec[1..4]));
    let (description, body) = split_terminated(encoding, &vec[4..]);

    Ok((
        language,
        decode_string(encoding, description),
        decode_string(encoding, body),
    ))
}

pub fn comment(input: &mut dyn Read) -> Result<Frame, Error> {
    let (language, description, text) = language_frame(input, "Comment")?;
    Ok(Frame::Comment {
        language,
        description,
        text,
    })
}

pub fn unsynchronised_lyrics(input: &mut dyn Read) -> Result<Frame, Error> {
    let (language, description, lyrics) = language_frame(input, "Lyrics")?;
    Ok(Frame::UnsynchronisedLyrics {
        language,
        description,
        lyrics,
    })
}

// Pictures: encoding byte, null-terminated MIME type, picture type byte,
// null-terminated description, then the image data itself.
pub fn picture(input: &mut dyn Read) -> Result<Frame, Error> {
    let mut vec = Vec::new();
    input.read_to_end(&mut vec)?;

    if vec.len() < 3 {
        return Err(decode_error("Picture frame is shorter than its fixed fields"));
    }

    let encoding = vec[0];

    // the MIME type is always ISO-8859-1, whatever the declared encoding
    let (mime, rest) = split_terminated(0x00, &vec[1..]);
    if rest.is_empty() {
        return Err(decode_error("Picture frame is missing its picture type"));
    }

    let picture_type = rest[0];
    let (description, data) = split_terminated(encoding, &rest[1..]);

    Ok(Frame::Picture {
        mime: decode_iso_8859_1(mime),
        picture_type,
        description: decode_string(encoding, description),
        data: data.to_vec(),
    })
}
