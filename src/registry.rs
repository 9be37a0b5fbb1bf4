//! Pattern registry: every compiled matcher and lookup table the stages use.
//!
//! Patterns are compiled exactly once, on first use of
//! [`PatternRegistry::global`], and are read-only afterwards.  Stages only
//! borrow from the registry; none of them compiles a pattern per call.

use std::{collections::HashMap, ops::Range};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{error::PatternError, input::Removal, lexicon};

// ─────────────────────────────────────────────────────────────────────────────
// Pattern sources
// ─────────────────────────────────────────────────────────────────────────────

pub const HTML_PATTERN: &str = r"<[^>]+>";

/// Scheme-optional URL: `ftp://`, `smtp://`, `http(s)://[www.]`, bare `www.`
/// or a bare domain, then optional userinfo, port, path, fragment and query.
pub const URL_PATTERN: &str = concat!(
    r"(?:ftp://|smtp://|SMTP://|https?://(?:www\.)?|www\.)?",
    r"(?:[\x21-\x39\x3b-\x3f\x41-\x7e]+(?::[\x21-\x39\x3b-\x3f\x41-\x7e]+)?@)?",
    r"(?:(?:xn--[0-9a-z]+|[0-9A-Za-z_-]+)\.)*",
    r"(?:xn--[0-9a-z]+|[0-9A-Za-z-]+)\.(?:xn--[0-9a-z]+|[0-9A-Za-z]{2,10})",
    r"(?::(?:6553[0-5]|655[0-2][0-9]|65[0-4][0-9]{2}|6[0-4][0-9]{3}|[1-5][0-9]{4}|[1-9][0-9]{1,3}|[0-9]))?",
    r"(?:/[\x21\x22\x24\x25\x27-\x7e]*)*",
    r"(?:#[\x21\x22\x24\x25\x27-\x7e]*)?",
    r"(?:\?[\x21\x22\x24\x25\x27-\x2e\x30-\x3b\x40-\x5b\x5d-\x7e]+=[\x21\x22\x24\x25\x27-\x2e\x30-\x3b\x40-\x5b\x5d-\x7e]*)?",
);

/// `@` plus 1–15 word characters, as Twitter allows.
pub const TWITTER_USERNAME_PATTERN: &str = r"(?<!\w)@\w{1,15}\b";

/// `@` plus any number of word characters.
pub const ANY_USERNAME_PATTERN: &str = r"(?<!\w)@\w+";

/// ASCII or fullwidth hash sign followed by word characters in any script.
pub const HASHTAG_PATTERN: &str = r"[#＃]\w+";

pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+";

/// Emoji blocks:
/// emoticons, misc symbols & pictographs (incl. skin tones), transport & map,
/// regional-indicator flags, supplemental symbols, pictographs extended-A,
/// misc symbols, dingbats, the technical glyphs used as emoji, wavy dash,
/// variation selector 16 and the zero-width joiner.
pub const EMOJI_PATTERN: &str = concat!(
    "[",
    r"\x{1F600}-\x{1F64F}",
    r"\x{1F300}-\x{1F5FF}",
    r"\x{1F680}-\x{1F6FF}",
    r"\x{1F1E0}-\x{1F1FF}",
    r"\x{1F900}-\x{1F9FF}",
    r"\x{1FA70}-\x{1FAFF}",
    r"\x{2600}-\x{26FF}",
    r"\x{2700}-\x{27BF}",
    r"\x{231A}-\x{231B}",
    r"\x{23CF}",
    r"\x{23E9}-\x{23F3}",
    r"\x{23F8}-\x{23FA}",
    r"\x{3030}",
    r"\x{FE0F}",
    r"\x{200D}",
    "]+",
);

pub const NON_LETTER_PATTERN: &str = r"[^a-zA-Z\s]";
pub const DIGIT_PATTERN: &str = r"\d";
pub const WHITESPACE_PATTERN: &str = r"\s+";
pub const WORD_PATTERN: &str = r"\w+";

// ─────────────────────────────────────────────────────────────────────────────
// Matcher / Pattern
// ─────────────────────────────────────────────────────────────────────────────

/// A compiled matcher: plain `regex` when no look-around is needed,
/// `fancy_regex` otherwise.
#[derive(Debug)]
pub enum Matcher {
    Plain(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Matcher {
    pub fn plain(source: &str) -> Result<Self, PatternError> {
        Ok(Matcher::Plain(regex::Regex::new(source)?))
    }

    pub fn fancy(source: &str) -> Result<Self, PatternError> {
        Ok(Matcher::Fancy(fancy_regex::Regex::new(source)?))
    }

    /// Byte ranges of all non-overlapping matches, leftmost-first.
    ///
    /// A fancy-regex runtime failure (backtrack limit) ends the scan; the
    /// matches found so far are kept and the remaining text is left alone.
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        match self {
            Matcher::Plain(re) => re.find_iter(text).map(|m| m.range()).collect(),
            Matcher::Fancy(re) => {
                let mut spans = Vec::new();
                for found in re.find_iter(text) {
                    match found {
                        Ok(m) => spans.push(m.start()..m.end()),
                        Err(e) => {
                            debug!(error = %e, offset = spans.last().map_or(0, |r: &Range<usize>| r.end), "pattern scan stopped");
                            break;
                        }
                    }
                }
                spans
            }
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Plain(re) => re.is_match(text),
            Matcher::Fancy(re) => re.is_match(text).unwrap_or(false),
        }
    }
}

/// Rebuild `text`, letting `emit` write the replacement for every span.
fn splice<F>(text: &str, spans: &[Range<usize>], mut emit: F) -> String
where
    F: FnMut(&str, &mut String),
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        emit(&text[span.clone()], &mut out);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// What a [`Pattern`] does with its matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Delete,
    Replace(&'static str),
}

/// A compiled matcher together with its substitution policy.
#[derive(Debug)]
pub struct Pattern {
    matcher: Matcher,
    policy: Policy,
}

impl Pattern {
    pub fn plain(source: &str, policy: Policy) -> Result<Self, PatternError> {
        Ok(Self { matcher: Matcher::plain(source)?, policy })
    }

    pub fn fancy(source: &str, policy: Policy) -> Result<Self, PatternError> {
        Ok(Self { matcher: Matcher::fancy(source)?, policy })
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Apply the policy to every match; the count is the number of matches.
    pub fn apply(&self, text: &str) -> Removal {
        let spans = self.matcher.spans(text);
        if spans.is_empty() {
            return Removal::untouched(text);
        }
        let out = splice(text, &spans, |_, out| {
            if let Policy::Replace(with) = self.policy {
                out.push_str(with);
            }
        });
        Removal::new(out, spans.len())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LookupTable
// ─────────────────────────────────────────────────────────────────────────────

/// How a lookup table's keys are located in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    /// Anywhere, even inside a word.
    Substring,
    /// Not preceded or followed by a word character.
    WholeToken,
}

/// Immutable surface form → canonical text mapping with its compiled
/// alternation.
///
/// Keys are tried longest first (ties keep their listed order), so a longer
/// form always beats a prefix of itself at the same position.
///
/// Whole-token tables scan with a plain alternation and check the characters
/// on either side of each candidate.
#[derive(Debug)]
pub struct LookupTable {
    entries: HashMap<String, String>,
    /// Lowercased keys; only populated for case-insensitive tables.
    folded: HashMap<String, String>,
    /// Keys in alternation order.
    keys: Vec<String>,
    boundary: Boundary,
    /// `None` for an empty table.
    matcher: Option<regex::Regex>,
}

impl LookupTable {
    /// Substring table; case-insensitive when `case_insensitive` is set.
    pub fn substring<I, K, V>(pairs: I, case_insensitive: bool) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::build(pairs, case_insensitive, Boundary::Substring)
    }

    /// Case-sensitive table whose keys only match as whole tokens.
    pub fn whole_token<I, K, V>(pairs: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::build(pairs, false, Boundary::WholeToken)
    }

    fn build<I, K, V>(pairs: I, case_insensitive: bool, boundary: Boundary) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut keys: Vec<String> = Vec::new();
        let mut entries = HashMap::new();
        let mut folded = HashMap::new();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key.is_empty() {
                continue;
            }
            if entries.insert(key.to_string(), value.to_string()).is_none() {
                keys.push(key.to_string());
            }
            if case_insensitive {
                folded.entry(key.to_lowercase()).or_insert_with(|| value.to_string());
            }
        }

        if keys.is_empty() {
            return Ok(Self { entries, folded, keys, boundary, matcher: None });
        }

        // Stable sort: longest first, listed order among equals.
        keys.sort_by_key(|k| std::cmp::Reverse(k.chars().count()));
        let flags = if case_insensitive { "(?i)" } else { "" };
        let alternation: Vec<String> = keys.iter().map(|k| regex::escape(k)).collect();
        let matcher = regex::Regex::new(&format!("{}(?:{})", flags, alternation.join("|")))?;
        Ok(Self { entries, folded, keys, boundary, matcher: Some(matcher) })
    }


    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact-case hit first, then the lowercased key (case-insensitive tables).
    pub fn lookup(&self, surface: &str) -> Option<&str> {
        self.entries
            .get(surface)
            .or_else(|| {
                if self.folded.is_empty() {
                    None
                } else {
                    self.folded.get(&surface.to_lowercase())
                }
            })
            .map(String::as_str)
    }

    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        match (&self.matcher, self.boundary) {
            (None, _) => Vec::new(),
            (Some(re), Boundary::Substring) => re.find_iter(text).map(|m| m.range()).collect(),
            (Some(re), Boundary::WholeToken) => self.token_spans(re, text),
        }
    }

    /// Leftmost key occurrences with no word character on either side.
    ///
    /// When the alternation's pick is glued to a following word character, a
    /// shorter key at the same position may still stand alone; otherwise the
    /// search resumes one character later.
    fn token_spans(&self, re: &regex::Regex, text: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut at = 0;
        while let Some(m) = re.find_at(text, at) {
            let start = m.start();
            let glued_before = text[..start].chars().next_back().is_some_and(is_word_char);
            let end = if glued_before {
                None
            } else if stands_alone_until(text, m.end()) {
                Some(m.end())
            } else {
                self.keys
                    .iter()
                    .filter(|k| text[start..].starts_with(k.as_str()))
                    .map(|k| start + k.len())
                    .find(|&end| stands_alone_until(text, end))
            };
            match end {
                Some(end) => {
                    spans.push(start..end);
                    at = end;
                }
                None => at = start + text[start..].chars().next().map_or(1, char::len_utf8),
            }
        }
        spans
    }

    /// Substitute every key occurrence with its canonical text.
    pub fn replace(&self, text: &str) -> Removal {
        self.replace_with(text, |canonical, out| out.push_str(canonical))
    }

    /// Like [`replace`](Self::replace), but `emit` writes the output for each
    /// canonical value.
    pub fn replace_with<F>(&self, text: &str, mut emit: F) -> Removal
    where
        F: FnMut(&str, &mut String),
    {
        let spans = self.spans(text);
        if spans.is_empty() {
            return Removal::untouched(text);
        }
        let mut replaced = 0;
        let out = splice(text, &spans, |surface, out| match self.lookup(surface) {
            Some(canonical) => {
                emit(canonical, out);
                replaced += 1;
            }
            None => out.push_str(surface),
        });
        Removal::new(out, replaced)
    }

    /// Delete every key occurrence.
    pub fn remove(&self, text: &str) -> Removal {
        let spans = self.spans(text);
        if spans.is_empty() {
            return Removal::untouched(text);
        }
        Removal::new(splice(text, &spans, |_, _| {}), spans.len())
    }
}

/// `\w` as Unicode word characters.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn stands_alone_until(text: &str, end: usize) -> bool {
    !text[end..].chars().next().is_some_and(is_word_char)
}

// ─────────────────────────────────────────────────────────────────────────────
// PatternRegistry
// ─────────────────────────────────────────────────────────────────────────────

/// Every bundled pattern and table, compiled.
#[derive(Debug)]
pub struct PatternRegistry {
    pub html: Pattern,
    pub url: Pattern,
    pub twitter_username: Pattern,
    pub any_username: Pattern,
    pub hashtag: Pattern,
    pub email: Pattern,
    pub emoji: Pattern,
    pub non_letter: Pattern,
    pub digit: Pattern,
    pub whitespace: Pattern,
    pub word: Pattern,
    pub contractions: LookupTable,
    pub typos_slang: LookupTable,
    pub acronyms: LookupTable,
    pub abbreviations: LookupTable,
    pub emoticons: LookupTable,
}

static REGISTRY: Lazy<PatternRegistry> =
    Lazy::new(|| PatternRegistry::new().expect("bundled patterns must compile"));

impl PatternRegistry {
    /// Compile every pattern and table.  Prefer [`PatternRegistry::global`];
    /// this is exposed for callers that want an explicitly owned registry.
    pub fn new() -> Result<Self, PatternError> {
        let registry = Self {
            html: Pattern::plain(HTML_PATTERN, Policy::Delete)?,
            url: Pattern::plain(URL_PATTERN, Policy::Delete)?,
            twitter_username: Pattern::fancy(TWITTER_USERNAME_PATTERN, Policy::Delete)?,
            any_username: Pattern::fancy(ANY_USERNAME_PATTERN, Policy::Delete)?,
            hashtag: Pattern::plain(HASHTAG_PATTERN, Policy::Delete)?,
            email: Pattern::plain(EMAIL_PATTERN, Policy::Delete)?,
            emoji: Pattern::plain(EMOJI_PATTERN, Policy::Delete)?,
            non_letter: Pattern::plain(NON_LETTER_PATTERN, Policy::Delete)?,
            digit: Pattern::plain(DIGIT_PATTERN, Policy::Delete)?,
            whitespace: Pattern::plain(WHITESPACE_PATTERN, Policy::Replace(" "))?,
            word: Pattern::plain(WORD_PATTERN, Policy::Delete)?,
            contractions: LookupTable::substring(lexicon::CONTRACTIONS.iter().copied(), true)?,
            typos_slang: LookupTable::whole_token(lexicon::TYPOS_SLANG.iter().copied())?,
            acronyms: LookupTable::whole_token(lexicon::ACRONYMS.iter().copied())?,
            abbreviations: LookupTable::whole_token(lexicon::ABBREVIATIONS.iter().copied())?,
            emoticons: LookupTable::substring(lexicon::EMOTICONS.iter().copied(), false)?,
        };
        debug!(
            contractions = registry.contractions.len(),
            abbreviations = registry.abbreviations.len(),
            emoticons = registry.emoticons.len(),
            "pattern registry compiled"
        );
        Ok(registry)
    }

    /// The process-wide registry, compiled on first access.
    pub fn global() -> &'static PatternRegistry {
        &REGISTRY
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_compiles() {
        assert!(PatternRegistry::new().is_ok());
    }

    #[test]
    fn test_global_is_shared() {
        let a = PatternRegistry::global() as *const _;
        let b = PatternRegistry::global() as *const _;
        assert_eq!(a, b);
    }

    #[test]
    fn test_longest_key_wins() {
        let table = LookupTable::substring([("can't", "cannot"), ("can't've", "cannot have")], true).unwrap();
        let out = table.replace("I can't've done it");
        assert_eq!(out.text, "I cannot have done it");
        assert_eq!(out.matches, 1);
    }

    #[test]
    fn test_case_insensitive_lookup_falls_back_to_lowercase() {
        let table = LookupTable::substring([("I'm", "I am"), ("don't", "do not")], true).unwrap();
        assert_eq!(table.lookup("I'm"), Some("I am"));
        assert_eq!(table.lookup("i'M"), Some("I am"));
        assert_eq!(table.lookup("DON'T"), Some("do not"));
        assert_eq!(table.lookup("nope"), None);
    }

    #[test]
    fn test_whole_token_respects_word_edges() {
        let table = LookupTable::whole_token([("u", "you"), ("w/o", "without")]).unwrap();
        assert_eq!(table.replace("u and w/o").text, "you and without");
        assert_eq!(table.replace("run fun").text, "run fun");
        assert_eq!(table.replace("U").text, "U", "whole-token tables are case-sensitive");
    }

    #[test]
    fn test_whole_token_falls_back_to_shorter_key() {
        let table = LookupTable::whole_token([("w/o", "without"), ("w", "with")]).unwrap();
        assert_eq!(table.replace("w/ox").text, "with/ox");
        assert_eq!(table.replace("aw/o").text, "aw/o");
        assert_eq!(table.replace("w/o w").text, "without with");
    }

    #[test]
    fn test_whole_token_scan_covers_long_input() {
        let table = LookupTable::whole_token([("btw", "by the way")]).unwrap();
        let text = format!("{}btw", "hello world ".repeat(20_000));
        assert!(text.len() > 200_000);
        let out = table.replace(&text);
        assert_eq!(out.matches, 1);
        assert!(out.text.ends_with("hello world by the way"), "got tail: {}", &out.text[out.text.len() - 40..]);
    }

    #[test]
    fn test_empty_table_is_identity() {
        let table = LookupTable::whole_token(Vec::<(String, String)>::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.replace("anything at all"), Removal::untouched("anything at all"));
    }

    #[test]
    fn test_replace_policy() {
        let reg = PatternRegistry::global();
        let out = reg.whitespace.apply("a  \t b\n\nc");
        assert_eq!(out.text, "a b c");
        assert_eq!(out.matches, 2);
    }

    #[test]
    fn test_emoticon_longest_form_first() {
        let reg = PatternRegistry::global();
        let out = reg.emoticons.remove("great :-)) day");
        assert_eq!(out.text, "great  day", "got: {}", out.text);
        assert_eq!(out.matches, 1);
    }

    #[test]
    fn test_emoji_run_is_one_match() {
        let reg = PatternRegistry::global();
        let out = reg.emoji.apply("fire 🔥🔥 and 👍🏽!");
        assert_eq!(out.text, "fire  and !");
        assert_eq!(out.matches, 2);
    }

    #[test]
    fn test_emoji_leaves_cjk_alone() {
        let reg = PatternRegistry::global();
        assert_eq!(reg.emoji.apply("東京 ok").matches, 0);
    }

    #[test]
    fn test_fancy_is_match() {
        let reg = PatternRegistry::global();
        assert!(reg.twitter_username.matcher().is_match("hi @bob"));
        assert!(!reg.twitter_username.matcher().is_match("mail bob@example.com"));
    }
}
