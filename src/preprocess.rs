//! Normalization stages.
//!
//! Every stage is a pure function over `Option<&str>`: `None` in gives `None`
//! out, and a stage never mutates its input.  Stages that remove or
//! substitute structural matches return a [`Removal`] carrying the number of
//! matches they rewrote.
//!
//! All patterns come from the process-wide [`PatternRegistry`]; nothing here
//! compiles a regex per call.

use std::collections::HashSet;

use encoding_rs::{DecoderResult, Encoding};
use tracing::debug;

use crate::{
    input::{RawInput, Removal},
    registry::{LookupTable, PatternRegistry},
    stopwords::StopwordSet,
};

fn registry() -> &'static PatternRegistry {
    PatternRegistry::global()
}

// ─────────────────────────────────────────────────────────────────────────────
// Whitespace and case
// ─────────────────────────────────────────────────────────────────────────────

/// Trim both ends and collapse every internal whitespace run to one space.
pub fn to_strip(text: Option<&str>) -> Option<String> {
    let text = text?;
    Some(registry().whitespace.apply(text.trim()).text)
}

/// Collapse whitespace runs to one space without trimming.
pub fn remove_many_spaces(text: Option<&str>) -> Option<String> {
    Some(registry().whitespace.apply(text?).text)
}

pub fn to_lower(text: Option<&str>) -> Option<String> {
    text.map(str::to_lowercase)
}

/// True when the text is empty or whitespace only.
pub fn blank_checker(text: Option<&str>) -> Option<bool> {
    text.map(|t| t.chars().all(char::is_whitespace))
}

// ─────────────────────────────────────────────────────────────────────────────
// Character classes
// ─────────────────────────────────────────────────────────────────────────────

/// Delete every Unicode decimal digit; surrounding spacing is kept.
pub fn remove_number(text: Option<&str>) -> Option<String> {
    Some(registry().digit.apply(text?).text)
}

/// Delete everything that is neither an ASCII letter nor whitespace.
pub fn remove_any_char(text: Option<&str>) -> Option<Removal> {
    Some(registry().non_letter.apply(text?))
}

/// Delete ASCII punctuation (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
pub fn remove_punctuation(text: Option<&str>) -> Option<String> {
    Some(text?.chars().filter(|c| !c.is_ascii_punctuation()).collect())
}

/// Delete every occurrence of the caller's literal substrings.
///
/// The list is scanned leftmost-first; at a given position the first listed
/// needle that matches wins.  Empty needles are ignored.  With no list, or an
/// empty one, the text comes back unchanged with a zero count.
pub fn remove_special_char(text: Option<&str>, special_chars: Option<&[String]>) -> Option<Removal> {
    let text = text?;
    let needles: Vec<&str> = special_chars
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .filter(|s| !s.is_empty())
        .collect();
    if needles.is_empty() {
        return Some(Removal::untouched(text));
    }

    let mut out = String::with_capacity(text.len());
    let mut matches = 0;
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        match needles.iter().find(|n| rest.starts_with(**n)) {
            Some(needle) => {
                rest = &rest[needle.len()..];
                matches += 1;
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    Some(Removal::new(out, matches))
}

// ─────────────────────────────────────────────────────────────────────────────
// Structural removal
// ─────────────────────────────────────────────────────────────────────────────

/// Delete HTML/XML tags.
pub fn remove_xml(text: Option<&str>) -> Option<Removal> {
    Some(registry().html.apply(text?))
}

pub fn remove_url(text: Option<&str>) -> Option<Removal> {
    Some(registry().url.apply(text?))
}

/// Delete `@name` mentions of at most 15 word characters.
pub fn remove_twitter_username(text: Option<&str>) -> Option<Removal> {
    Some(registry().twitter_username.apply(text?))
}

/// Delete `@name` mentions of any length.
pub fn remove_username(text: Option<&str>) -> Option<Removal> {
    Some(registry().any_username.apply(text?))
}

pub fn remove_hashtag(text: Option<&str>) -> Option<Removal> {
    Some(registry().hashtag.apply(text?))
}

pub fn remove_email_address(text: Option<&str>) -> Option<Removal> {
    Some(registry().email.apply(text?))
}

/// Delete emoji; a contiguous run (flags, ZWJ sequences, skin tones) is one match.
pub fn remove_emoji(text: Option<&str>) -> Option<Removal> {
    Some(registry().emoji.apply(text?))
}

pub fn remove_emoticons(text: Option<&str>) -> Option<Removal> {
    Some(registry().emoticons.remove(text?))
}

/// Replace each emoticon with its description, spaces turned into `_`
/// (`:-)` → `Happy_face_or_smiley`).
pub fn convert_emoticons(text: Option<&str>) -> Option<Removal> {
    Some(registry().emoticons.replace_with(text?, |description, out| {
        out.extend(description.chars().map(|c| if c == ' ' { '_' } else { c }))
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Duplicates
// ─────────────────────────────────────────────────────────────────────────────

/// Keep only the first occurrence of each whitespace-separated token.
///
/// Comparison is exact (case-sensitive, punctuation included); survivors are
/// joined with single spaces in their original order.
pub fn remove_all_duplication(text: Option<&str>) -> Option<String> {
    let text = text?;
    let mut seen = HashSet::new();
    let kept: Vec<&str> = text.split_whitespace().filter(|tok| seen.insert(*tok)).collect();
    Some(kept.join(" "))
}

/// Collapse a word followed by single-space-separated repeats of itself,
/// compared case-insensitively, into its first occurrence.
///
/// `"this just so So so nice"` → `"this just so nice"`.
pub fn remove_consecutive_duplication(text: Option<&str>) -> Option<String> {
    let text = text?;
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    // Lowercased first word of the current run, and where the run ends.
    let mut anchor: Option<String> = None;
    let mut run_end = 0;

    for span in registry().word.matcher().spans(text) {
        let word = text[span.clone()].to_lowercase();
        let repeats = anchor.as_deref() == Some(word.as_str()) && &text[run_end..span.start] == " ";
        if repeats {
            out.push_str(&text[copied..run_end]);
            copied = span.end;
        } else {
            anchor = Some(word);
        }
        run_end = span.end;
    }
    out.push_str(&text[copied..]);
    Some(out)
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexical substitution
// ─────────────────────────────────────────────────────────────────────────────

/// Expand contractions, then drop every remaining apostrophe.
///
/// Contractions match case-insensitively; the replacement comes from the
/// exact-case entry when there is one, otherwise from the lowercased form.
pub fn expand_contractions(text: Option<&str>) -> Option<String> {
    let expanded = registry().contractions.replace(text?);
    Some(expanded.text.replace('\'', ""))
}

/// Expand informal forms: typos and slang, then acronyms, then general
/// abbreviations.  Only whole tokens are replaced, case-sensitively.
pub fn abbreviation_converter(text: Option<&str>) -> Option<String> {
    let reg = registry();
    let text = reg.typos_slang.replace(text?).text;
    let text = reg.acronyms.replace(&text).text;
    Some(reg.abbreviations.replace(&text).text)
}

/// Whole-token replacement from a caller-built table.
pub fn replace_custom(text: Option<&str>, table: &LookupTable) -> Option<Removal> {
    Some(table.replace(text?))
}

/// Drop whitespace tokens that are in the stopword set; survivors are joined
/// with single spaces.
pub fn remove_stopwords(text: Option<&str>, stopwords: &StopwordSet) -> Option<String> {
    let kept: Vec<&str> = text?.split_whitespace().filter(|tok| !stopwords.contains(tok)).collect();
    Some(kept.join(" "))
}

// ─────────────────────────────────────────────────────────────────────────────
// Unicode coercion
// ─────────────────────────────────────────────────────────────────────────────

/// Coerce a raw value to text.
///
/// Text passes through untouched.  Bytes are decoded with the named encoding
/// (any WHATWG label: `utf-8`, `latin1`, `windows-1252`, `shift_jis`, ...),
/// silently dropping malformed sequences.  Anything else, or an unknown
/// encoding label, gives `None`.
pub fn convert_to_unicode(input: RawInput<'_>, encoding: &str) -> Option<String> {
    if let Some(text) = input.as_text() {
        return Some(text.to_string());
    }
    let bytes = input.as_bytes()?;
    let Some(encoding) = Encoding::for_label(encoding.trim().as_bytes()) else {
        debug!(label = encoding, "unknown encoding label");
        return None;
    };

    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut out = String::with_capacity(
        decoder.max_utf8_buffer_length_without_replacement(bytes.len()).unwrap_or(bytes.len()),
    );
    let mut rest = bytes;
    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(rest, &mut out, true);
        rest = &rest[read..];
        match result {
            DecoderResult::InputEmpty => break,
            // The malformed bytes have already been consumed; skip them.
            DecoderResult::Malformed(_, _) => continue,
            DecoderResult::OutputFull => out.reserve(rest.len().max(16) * 3),
        }
    }
    Some(out)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
