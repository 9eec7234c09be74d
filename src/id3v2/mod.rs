use std::collections::HashMap;

use std::io::prelude::*;
use std::io::SeekFrom;

use crate::Error;

mod ids;
mod read;
mod regex;
pub mod structure;
pub mod tools;

pub use crate::id3v2::structure::Frame;
use crate::id3v2::structure::FrameCoordinates;

const TAG_HEADER_SIZE: u64 = 10;
const FRAME_HEADER_SIZE: u64 = 10;

type DecoderFn = fn(&mut dyn Read) -> Result<Frame, Error>;

// One tag-parsing session over a seekable byte source.
//
// Parsing happens in two phases. `parse` scans the frame region once and
// records, per identifier, where each payload lives - without reading a
// single payload byte. Decoding happens later, per identifier, the first
// time someone asks: the coordinates move out of the pending index, the
// source is re-sought, and the decoded frames land in the resolved store.
// An identifier is pending or resolved, never both.
pub struct Tag<T: Read + Seek> {
    source: T,

    pending: HashMap<String, Vec<FrameCoordinates>>,
    resolved: HashMap<String, Vec<Frame>>,

    original_size: u64,
    version: u8,
    ids: &'static HashMap<&'static str, &'static str>,
}

pub fn parse<T: Read + Seek>(mut source: T) -> Result<Tag<T>, Error> {
    let header = match read::header(&mut source)? {
        Some(h) => h,
        // no header means an empty tag, not a broken one
        None => return Ok(Tag::new(source, 0, 4)),
    };

    let mut tag = Tag::new(
        source,
        TAG_HEADER_SIZE + u64::from(header.size),
        header.version,
    );
    tag.find_all_frames()?;

    Ok(tag)
}

impl<T: Read + Seek> Tag<T> {
    fn new(source: T, original_size: u64, version: u8) -> Tag<T> {
        Tag {
            source,
            pending: HashMap::new(),
            resolved: HashMap::new(),
            original_size,
            version,
            ids: ids::for_version(version),
        }
    }

    // Phase one: walk the frame region header by header, recording each
    // frame's payload coordinates and skipping over the payload itself.
    // Cost is proportional to the number of frames, not their sizes.
    fn find_all_frames(&mut self) -> Result<(), Error> {
        let mut pos = TAG_HEADER_SIZE;

        while pos < self.original_size {
            self.source.seek(SeekFrom::Start(pos))?;

            let header = match read::frame_header(&mut self.source, self.version)? {
                Some(h) => h,
                // padding runs to the end of the declared size
                None => break,
            };
            pos += FRAME_HEADER_SIZE;

            let fc = FrameCoordinates {
                len: header.size,
                pos,
            };
            self.pending
                .entry(header.id)
                .or_insert_with(Vec::new)
                .push(fc);

            pos += u64::from(header.size);
        }

        Ok(())
    }

    // Picks the payload decoder for an identifier. Every frame whose id
    // starts with 'T' shares the text wire shape; three more well-known
    // ids get their own decoder; everything else stays undecoded.
    fn find_decoder(&self, id: &str) -> Option<DecoderFn> {
        if id.starts_with('T') {
            return Some(read::text);
        }

        if self.id("Attached picture") == Some(id) {
            return Some(read::picture);
        }
        if self.id("Comments") == Some(id) {
            return Some(read::comment);
        }
        if self.id("Unsynchronised lyrics/text transcription") == Some(id) {
            return Some(read::unsynchronised_lyrics);
        }

        None
    }

    // Phase two, for one identifier: decode every recorded occurrence in
    // scan order against a reader capped at the recorded length, so a
    // decoder can never run past its own frame. Idempotent - once the
    // coordinates are gone there is nothing left to read.
    //
    // One undecodable payload only loses that occurrence; the rest of the
    // identifier's frames still resolve. I/O failures abort the call.
    pub fn resolve(&mut self, id: &str) -> Result<(), Error> {
        let coords = match self.pending.remove(id) {
            Some(c) => c,
            None => return Ok(()),
        };

        let decode = match self.find_decoder(id) {
            Some(d) => d,
            // structurally present, deliberately left undecoded
            None => return Ok(()),
        };

        for fc in coords {
            self.source.seek(SeekFrom::Start(fc.pos))?;
            let mut bounded = (&mut self.source).take(u64::from(fc.len));

            match decode(&mut bounded) {
                Ok(frame) => self
                    .resolved
                    .entry(id.to_string())
                    .or_insert_with(Vec::new)
                    .push(frame),
                Err(Error::DecodeError(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    pub fn resolve_all(&mut self) -> Result<(), Error> {
        let pending: Vec<String> = self.pending.keys().cloned().collect();
        for id in pending {
            self.resolve(&id)?;
        }
        Ok(())
    }

    // Fetches all decoded frames for a human-readable frame name,
    // resolving them on first access. Absent names yield an empty slice.
    pub fn get(&mut self, name: &str) -> Result<&[Frame], Error> {
        match self.id(name) {
            Some(id) => self.get_id(id),
            None => Ok(&[]),
        }
    }

    pub fn get_id(&mut self, id: &str) -> Result<&[Frame], Error> {
        self.resolve(id)?;
        Ok(self.resolved.get(id).map(Vec::as_slice).unwrap_or(&[]))
    }

    pub fn has_frame(&self, name: &str) -> bool {
        match self.id(name) {
            Some(id) => self.has_frame_id(id),
            None => false,
        }
    }

    pub fn has_frame_id(&self, id: &str) -> bool {
        self.pending.contains_key(id) || self.resolved.contains_key(id)
    }

    // Version ID Table lookup: human-readable name to on-disk identifier,
    // resolved against the table matching this tag's version.
    pub fn id(&self, name: &str) -> Option<&'static str> {
        self.ids.get(name).copied()
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn frame_count(&self) -> usize {
        self.pending.values().map(Vec::len).sum::<usize>()
            + self.resolved.values().map(Vec::len).sum::<usize>()
    }

    pub fn into_inner(self) -> T {
        self.source
    }
}
