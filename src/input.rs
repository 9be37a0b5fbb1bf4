//! Input model shared by every stage.
//!
//! Stages take `Option<&str>`: `None` stands for both an absent value and a
//! value that is not text.  Callers holding loosely typed data (rows from a
//! dataset, bytes off the wire, FFI pointers) wrap it in [`RawInput`];
//! [`RawInput::as_text`] and [`RawInput::as_bytes`] are the only places that
//! decide what kind of value it holds.

/// A value of unknown cleanliness handed to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    /// Already-decoded text.
    Text(&'a str),
    /// Undecoded bytes; only [`convert_to_unicode`](crate::preprocess::convert_to_unicode)
    /// turns these into text.
    Bytes(&'a [u8]),
    /// Explicit absence of a value.
    Null,
    /// Any other kind of value (numbers, records, ...).
    Other,
}

impl<'a> RawInput<'a> {
    /// The text payload, or `None` for anything that is not text.
    pub fn as_text(self) -> Option<&'a str> {
        match self {
            RawInput::Text(s) => Some(s),
            RawInput::Bytes(_) | RawInput::Null | RawInput::Other => None,
        }
    }

    /// Undecoded bytes, or `None` for anything else.
    pub fn as_bytes(self) -> Option<&'a [u8]> {
        match self {
            RawInput::Bytes(b) => Some(b),
            RawInput::Text(_) | RawInput::Null | RawInput::Other => None,
        }
    }
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(s: &'a str) -> Self {
        RawInput::Text(s)
    }
}

impl<'a> From<&'a String> for RawInput<'a> {
    fn from(s: &'a String) -> Self {
        RawInput::Text(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for RawInput<'a> {
    fn from(b: &'a [u8]) -> Self {
        RawInput::Bytes(b)
    }
}

impl<'a> From<Option<&'a str>> for RawInput<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(RawInput::Null, RawInput::Text)
    }
}

/// Result of a stage that removes or substitutes matches.
///
/// `matches` is the number of non-overlapping matches the stage rewrote; it is
/// `0`, never absent, when valid text contained nothing to rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub text: String,
    pub matches: usize,
}

impl Removal {
    pub fn new(text: String, matches: usize) -> Self {
        Self { text, matches }
    }

    /// Text unchanged, zero matches.
    pub fn untouched(text: &str) -> Self {
        Self { text: text.to_string(), matches: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_text_is_text() {
        assert_eq!(RawInput::Text("hi").as_text(), Some("hi"));
        assert_eq!(RawInput::Bytes(b"hi").as_text(), None);
        assert_eq!(RawInput::Null.as_text(), None);
        assert_eq!(RawInput::Other.as_text(), None);
    }

    #[test]
    fn test_only_bytes_are_bytes() {
        assert_eq!(RawInput::Bytes(b"hi").as_bytes(), Some(&b"hi"[..]));
        assert_eq!(RawInput::Text("hi").as_bytes(), None);
        assert_eq!(RawInput::Null.as_bytes(), None);
        assert_eq!(RawInput::Other.as_bytes(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(RawInput::from(None), RawInput::Null);
        assert_eq!(RawInput::from(None::<&str>).as_text(), None);
        assert_eq!(RawInput::from(Some("x")), RawInput::Text("x"));
    }
}
