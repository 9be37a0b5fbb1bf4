//! Stopword sets.
//!
//! A [`StopwordSet`] is built from one or more languages of a
//! [`LexiconProvider`] and is never mutated afterwards; adding words produces
//! a new set.  The bundled [`NltkLexicon`] serves the lists compiled into the
//! `stop-words` crate, addressed by lowercase English language names
//! (`english`, `french`, ...).

use std::collections::{BTreeSet, HashSet};

use stop_words::LANGUAGE;
use tracing::{debug, info, warn};

use crate::error::LexiconError;

// ─────────────────────────────────────────────────────────────────────────────
// WordList
// ─────────────────────────────────────────────────────────────────────────────

/// One word or language name, or a collection of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordList {
    Single(String),
    List(Vec<String>),
    Set(BTreeSet<String>),
}

impl WordList {
    pub fn is_empty(&self) -> bool {
        match self {
            WordList::Single(_) => false,
            WordList::List(v) => v.is_empty(),
            WordList::Set(s) => s.is_empty(),
        }
    }
}

impl IntoIterator for WordList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            WordList::Single(s) => vec![s].into_iter(),
            WordList::List(v) => v.into_iter(),
            WordList::Set(s) => s.into_iter().collect::<Vec<_>>().into_iter(),
        }
    }
}

impl From<&str> for WordList {
    fn from(s: &str) -> Self {
        WordList::Single(s.to_string())
    }
}

impl From<String> for WordList {
    fn from(s: String) -> Self {
        WordList::Single(s)
    }
}

impl From<Vec<String>> for WordList {
    fn from(v: Vec<String>) -> Self {
        WordList::List(v)
    }
}

impl From<Vec<&str>> for WordList {
    fn from(v: Vec<&str>) -> Self {
        WordList::List(v.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for WordList {
    fn from(v: &[&str]) -> Self {
        WordList::List(v.iter().map(|s| s.to_string()).collect())
    }
}

impl From<BTreeSet<String>> for WordList {
    fn from(s: BTreeSet<String>) -> Self {
        WordList::Set(s)
    }
}

impl From<HashSet<String>> for WordList {
    fn from(s: HashSet<String>) -> Self {
        WordList::Set(s.into_iter().collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StopwordSet
// ─────────────────────────────────────────────────────────────────────────────

/// Lowercase stopwords plus the languages they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
    languages: Vec<String>,
}

impl StopwordSet {
    /// A set of caller-chosen words with no language attached.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { words: normalize_words(words), languages: Vec::new() }
    }

    /// Exact membership; the set only holds lowercase forms.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Languages the set was built from, sorted.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn is_superset(&self, other: &StopwordSet) -> bool {
        self.words.is_superset(&other.words)
    }
}

fn normalize_words<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────────────────────────────────────

/// Source of per-language stopword lists.
pub trait LexiconProvider {
    /// Identifiers of every language the provider can serve.
    fn languages(&self) -> BTreeSet<String>;

    /// The stopwords of one language.  A lexicon that exists but is not
    /// present locally is reported as [`LexiconError::ResourceMissing`].
    fn words(&self, language: &str) -> Result<Vec<String>, LexiconError>;

    /// Make every lexicon available locally.
    fn download(&self) -> Result<(), LexiconError>;
}

/// Bundled provider backed by the lists compiled into `stop-words`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NltkLexicon;

const NLTK_LANGUAGES: &[&str] = &[
    "arabic", "danish", "dutch", "english", "finnish", "french", "german", "greek", "hungarian",
    "italian", "norwegian", "portuguese", "romanian", "russian", "spanish", "swedish", "turkish",
];

fn stop_words_language(name: &str) -> Option<LANGUAGE> {
    Some(match name {
        "arabic" => LANGUAGE::Arabic,
        "danish" => LANGUAGE::Danish,
        "dutch" => LANGUAGE::Dutch,
        "english" => LANGUAGE::English,
        "finnish" => LANGUAGE::Finnish,
        "french" => LANGUAGE::French,
        "german" => LANGUAGE::German,
        "greek" => LANGUAGE::Greek,
        "hungarian" => LANGUAGE::Hungarian,
        "italian" => LANGUAGE::Italian,
        "norwegian" => LANGUAGE::Norwegian,
        "portuguese" => LANGUAGE::Portuguese,
        "romanian" => LANGUAGE::Romanian,
        "russian" => LANGUAGE::Russian,
        "spanish" => LANGUAGE::Spanish,
        "swedish" => LANGUAGE::Swedish,
        "turkish" => LANGUAGE::Turkish,
        _ => return None,
    })
}

impl LexiconProvider for NltkLexicon {
    fn languages(&self) -> BTreeSet<String> {
        NLTK_LANGUAGES.iter().map(|s| s.to_string()).collect()
    }

    fn words(&self, language: &str) -> Result<Vec<String>, LexiconError> {
        let lang = stop_words_language(language)
            .ok_or_else(|| LexiconError::ResourceMissing { language: language.to_string() })?;
        Ok(stop_words::get(lang).into_iter().map(|s| s.to_string()).collect())
    }

    /// Nothing to fetch: the lists are part of the binary.
    fn download(&self) -> Result<(), LexiconError> {
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Union of the stopwords of the requested languages.
///
/// Names are trimmed and lowercased.  Unsupported languages are dropped
/// silently; `Ok(None)` when nothing was requested or nothing requested is
/// supported.  A missing lexicon triggers one `download()` and one retry, a
/// second failure is returned.
pub fn stopwords_nltk<P>(provider: &P, languages: Option<WordList>) -> Result<Option<StopwordSet>, LexiconError>
where
    P: LexiconProvider + ?Sized,
{
    let Some(languages) = languages else {
        return Ok(None);
    };
    let requested: BTreeSet<String> = languages
        .into_iter()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();
    if requested.is_empty() {
        return Ok(None);
    }

    let supported = provider.languages();
    let chosen: Vec<String> = requested.intersection(&supported).cloned().collect();
    if chosen.len() < requested.len() {
        let dropped: Vec<&String> = requested.difference(&supported).collect();
        debug!(?dropped, "unsupported stopword languages dropped");
    }
    if chosen.is_empty() {
        return Ok(None);
    }

    let mut words = HashSet::new();
    let mut downloaded = false;
    for language in &chosen {
        let list = match provider.words(language) {
            Ok(list) => list,
            Err(LexiconError::ResourceMissing { .. }) if !downloaded => {
                warn!(language = %language, "stopword lexicon missing, downloading and retrying");
                info!("downloading stopword lexicons");
                provider.download()?;
                downloaded = true;
                provider.words(language)?
            }
            Err(e) => return Err(e),
        };
        words.extend(normalize_words(list));
    }

    debug!(languages = ?chosen, words = words.len(), "stopword set built");
    Ok(Some(StopwordSet { words, languages: chosen }))
}

/// A new set holding `set` plus the (lowercased) `words`.
///
/// `None` or an empty list gives a value-equal copy.
pub fn add_word_to_stopwords_set(set: &StopwordSet, words: Option<WordList>) -> StopwordSet {
    let mut out = set.clone();
    if let Some(words) = words {
        out.words.extend(normalize_words(words));
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Provider whose lexicons only appear after `download()`.
    struct LazyLexicon {
        downloads: Cell<usize>,
        fail_download: bool,
    }

    impl LazyLexicon {
        fn new(fail_download: bool) -> Self {
            Self { downloads: Cell::new(0), fail_download }
        }
    }

    impl LexiconProvider for LazyLexicon {
        fn languages(&self) -> BTreeSet<String> {
            ["english", "german"].iter().map(|s| s.to_string()).collect()
        }

        fn words(&self, language: &str) -> Result<Vec<String>, LexiconError> {
            if self.downloads.get() == 0 {
                return Err(LexiconError::ResourceMissing { language: language.to_string() });
            }
            Ok(match language {
                "english" => vec!["The".into(), "and".into()],
                _ => vec!["und".into()],
            })
        }

        fn download(&self) -> Result<(), LexiconError> {
            if self.fail_download {
                return Err(LexiconError::DownloadFailed { reason: "offline".into() });
            }
            self.downloads.set(self.downloads.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_single_language() {
        let set = stopwords_nltk(&NltkLexicon, Some("English".into())).unwrap().unwrap();
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert_eq!(set.languages(), ["english".to_string()]);
    }

    #[test]
    fn test_union_of_languages() {
        let en = stopwords_nltk(&NltkLexicon, Some("english".into())).unwrap().unwrap();
        let both = stopwords_nltk(&NltkLexicon, Some(vec![" english ", "FRENCH"].into())).unwrap().unwrap();
        assert!(both.is_superset(&en));
        assert!(both.len() > en.len(), "got: {}", both.len());
        assert_eq!(both.languages(), ["english".to_string(), "french".to_string()]);
    }

    #[test]
    fn test_unsupported_languages() {
        assert_eq!(stopwords_nltk(&NltkLexicon, None), Ok(None));
        assert_eq!(stopwords_nltk(&NltkLexicon, Some(Vec::<String>::new().into())), Ok(None));
        assert_eq!(stopwords_nltk(&NltkLexicon, Some("klingon".into())), Ok(None));

        let set = stopwords_nltk(&NltkLexicon, Some(vec!["klingon", "german"].into())).unwrap().unwrap();
        assert_eq!(set.languages(), ["german".to_string()]);
    }

    #[test]
    fn test_missing_lexicon_downloads_once() {
        let provider = LazyLexicon::new(false);
        let set = stopwords_nltk(&provider, Some(vec!["english", "german"].into())).unwrap().unwrap();
        assert_eq!(provider.downloads.get(), 1);
        assert!(set.contains("the"));
        assert!(set.contains("und"));
    }

    #[test]
    fn test_failed_download_surfaces() {
        let provider = LazyLexicon::new(true);
        let err = stopwords_nltk(&provider, Some("english".into())).unwrap_err();
        assert_eq!(err, LexiconError::DownloadFailed { reason: "offline".into() });
    }

    #[test]
    fn test_add_words() {
        let base = StopwordSet::from_words(["a", "b"]);
        let grown = add_word_to_stopwords_set(&base, Some(vec!["C", "a"].into()));
        assert!(grown.is_superset(&base));
        assert!(grown.contains("c"));
        assert_eq!(grown.len(), 3);
        assert_eq!(base.len(), 2, "original set is untouched");
    }

    #[test]
    fn test_add_nothing_is_copy() {
        let base = StopwordSet::from_words(["a"]);
        assert_eq!(add_word_to_stopwords_set(&base, None), base);
        assert_eq!(add_word_to_stopwords_set(&base, Some(WordList::List(vec![]))), base);
    }
}
