extern crate regex;
use self::regex::Regex;

// Comments and lyrics carry an ISO-639-2 language code: three letters.
// Writers in the wild put all sorts of junk here, so anything that
// doesn't look like a code becomes "xxx" rather than an error.
pub fn normalize_language(input: &str) -> String {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^[A-Za-z]{3}$").unwrap();
    }

    if RE.is_match(input) {
        input.to_ascii_lowercase()
    } else {
        "xxx".to_string()
    }
}
