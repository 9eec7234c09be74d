#[macro_use] extern crate lazy_static;

pub mod id3v2;

mod tools;

pub use crate::id3v2::parse;
pub use crate::id3v2::Frame;
pub use crate::id3v2::Tag;

use std::io;

#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    UnsupportedVersion(u8),
    TruncatedFrameHeader,
    DecodeError(String),
}

use std::fmt;
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref e) => write!(f, "IO error: {}", e),
            Error::UnsupportedVersion(v) => write!(f, "ID3v2.{} is not supported", v),
            Error::TruncatedFrameHeader => write!(f, "Size of frame header is less than expected"),
            Error::DecodeError(ref e) => write!(f, "Error decoding frame: {}", e),
        }
    }
}

use std::error;
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}
