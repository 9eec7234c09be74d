use std::collections::HashMap;

// Human-readable frame descriptions mapped to their on-disk identifiers,
// one table per supported major version. The descriptions follow the
// informal frame names from the id3.org frame lists.
//
// Built once, read-only afterwards; a Tag picks one table at parse time
// and keeps it for its whole lifetime.
lazy_static! {
    pub static ref V23_IDS: HashMap<&'static str, &'static str> = [
        ("Attached picture", "APIC"),
        ("Comments", "COMM"),
        ("Unsynchronised lyrics/text transcription", "USLT"),
        ("Album/Movie/Show title", "TALB"),
        ("BPM", "TBPM"),
        ("Composer", "TCOM"),
        ("Content type", "TCON"),
        ("Copyright message", "TCOP"),
        ("Date", "TDAT"),
        ("Encoded by", "TENC"),
        ("Lyricist/Text writer", "TEXT"),
        ("Time", "TIME"),
        ("Content group description", "TIT1"),
        ("Title/Songname/Content description", "TIT2"),
        ("Subtitle/Description refinement", "TIT3"),
        ("Initial key", "TKEY"),
        ("Language", "TLAN"),
        ("Length", "TLEN"),
        ("Media type", "TMED"),
        ("Original album/movie/show title", "TOAL"),
        ("Original artist(s)/performer(s)", "TOPE"),
        ("Original release year", "TORY"),
        ("Lead artist/Lead performer/Soloist/Performing group", "TPE1"),
        ("Band/Orchestra/Accompaniment", "TPE2"),
        ("Conductor/performer refinement", "TPE3"),
        ("Interpreted, remixed, or otherwise modified by", "TPE4"),
        ("Part of a set", "TPOS"),
        ("Publisher", "TPUB"),
        ("Track number/Position in set", "TRCK"),
        ("Recording dates", "TRDA"),
        ("ISRC", "TSRC"),
        ("Software/Hardware and settings used for encoding", "TSSE"),
        ("Year", "TYER"),
    ]
    .iter()
    .cloned()
    .collect();
    pub static ref V24_IDS: HashMap<&'static str, &'static str> = [
        ("Attached picture", "APIC"),
        ("Comments", "COMM"),
        ("Unsynchronised lyrics/text transcription", "USLT"),
        ("Album/Movie/Show title", "TALB"),
        ("BPM", "TBPM"),
        ("Composer", "TCOM"),
        ("Content type", "TCON"),
        ("Copyright message", "TCOP"),
        // v2.4 folded the year/date/time frames into timestamps
        ("Encoding time", "TDEN"),
        ("Original release time", "TDOR"),
        ("Recording time", "TDRC"),
        ("Release time", "TDRL"),
        ("Tagging time", "TDTG"),
        ("Encoded by", "TENC"),
        ("Lyricist/Text writer", "TEXT"),
        ("Content group description", "TIT1"),
        ("Title/Songname/Content description", "TIT2"),
        ("Subtitle/Description refinement", "TIT3"),
        ("Initial key", "TKEY"),
        ("Language", "TLAN"),
        ("Length", "TLEN"),
        ("Media type", "TMED"),
        ("Mood", "TMOO"),
        ("Original album/movie/show title", "TOAL"),
        ("Original artist(s)/performer(s)", "TOPE"),
        ("Lead artist/Lead performer/Soloist/Performing group", "TPE1"),
        ("Band/Orchestra/Accompaniment", "TPE2"),
        ("Conductor/performer refinement", "TPE3"),
        ("Interpreted, remixed, or otherwise modified by", "TPE4"),
        ("Part of a set", "TPOS"),
        ("Publisher", "TPUB"),
        ("Track number/Position in set", "TRCK"),
        ("Album sort order", "TSOA"),
        ("Performer sort order", "TSOP"),
        ("Title sort order", "TSOT"),
        ("ISRC", "TSRC"),
        ("Software/Hardware and settings used for encoding", "TSSE"),
        ("Set subtitle", "TSST"),
    ]
    .iter()
    .cloned()
    .collect();
}

pub fn for_version(version: u8) -> &'static HashMap<&'static str, &'static str> {
    if version == 3 {
        &V23_IDS
    } else {
        &V24_IDS
    }
}
