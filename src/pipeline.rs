//! Pipeline composition.
//!
//! A [`TextPreprocessor`] runs an ordered list of stages over one text.  The
//! order is the caller's: stages are not commutative (lowercasing before the
//! case-sensitive abbreviation table changes what it matches), so nothing is
//! reordered.  Once a stage yields `None` the run ends and later stages are
//! not invoked.
//!
//! Everything caller-specific (custom replacement table, stopword set) is
//! built once, when the preprocessor is constructed.

use std::{collections::BTreeMap, fmt, path::Path, str::FromStr, sync::Arc};

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::ConfigError,
    input::{RawInput, Removal},
    preprocess,
    registry::LookupTable,
    stopwords::{self, LexiconProvider, NltkLexicon, StopwordSet},
};

// ─────────────────────────────────────────────────────────────────────────────
// Stage names
// ─────────────────────────────────────────────────────────────────────────────

/// A built-in stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ToStrip,
    RemoveManySpaces,
    ToLower,
    RemoveNumber,
    RemoveAnyChar,
    RemoveXml,
    RemoveUrl,
    RemoveTwitterUsername,
    RemoveUsername,
    RemoveHashtag,
    RemoveEmailAddress,
    RemoveEmoji,
    RemoveEmoticons,
    ConvertEmoticons,
    RemoveSpecialChar,
    RemovePunctuation,
    RemoveAllDuplication,
    RemoveConsecutiveDuplication,
    ExpandContractions,
    AbbreviationConverter,
    ReplaceCustom,
    RemoveStopwords,
    /// Ends the run with `None` when the text is empty or whitespace only.
    RejectBlank,
}

impl Stage {
    pub const ALL: [Stage; 23] = [
        Stage::ToStrip,
        Stage::RemoveManySpaces,
        Stage::ToLower,
        Stage::RemoveNumber,
        Stage::RemoveAnyChar,
        Stage::RemoveXml,
        Stage::RemoveUrl,
        Stage::RemoveTwitterUsername,
        Stage::RemoveUsername,
        Stage::RemoveHashtag,
        Stage::RemoveEmailAddress,
        Stage::RemoveEmoji,
        Stage::RemoveEmoticons,
        Stage::ConvertEmoticons,
        Stage::RemoveSpecialChar,
        Stage::RemovePunctuation,
        Stage::RemoveAllDuplication,
        Stage::RemoveConsecutiveDuplication,
        Stage::ExpandContractions,
        Stage::AbbreviationConverter,
        Stage::ReplaceCustom,
        Stage::RemoveStopwords,
        Stage::RejectBlank,
    ];

    /// Default pipeline for tweets: structural noise first (e-mails before
    /// URLs, both before emoticons), then lexical expansion, then cleanup.
    pub const DEFAULT_TWEET: [Stage; 13] = [
        Stage::RemoveXml,
        Stage::RemoveEmailAddress,
        Stage::RemoveUrl,
        Stage::RemoveTwitterUsername,
        Stage::RemoveHashtag,
        Stage::RemoveEmoji,
        Stage::RemoveEmoticons,
        Stage::ExpandContractions,
        Stage::ToLower,
        Stage::AbbreviationConverter,
        Stage::RemoveConsecutiveDuplication,
        Stage::ToStrip,
        Stage::RejectBlank,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::ToStrip => "to_strip",
            Stage::RemoveManySpaces => "remove_many_spaces",
            Stage::ToLower => "to_lower",
            Stage::RemoveNumber => "remove_number",
            Stage::RemoveAnyChar => "remove_any_char",
            Stage::RemoveXml => "remove_xml",
            Stage::RemoveUrl => "remove_url",
            Stage::RemoveTwitterUsername => "remove_twitter_username",
            Stage::RemoveUsername => "remove_username",
            Stage::RemoveHashtag => "remove_hashtag",
            Stage::RemoveEmailAddress => "remove_email_address",
            Stage::RemoveEmoji => "remove_emoji",
            Stage::RemoveEmoticons => "remove_emoticons",
            Stage::ConvertEmoticons => "convert_emoticons",
            Stage::RemoveSpecialChar => "remove_special_char",
            Stage::RemovePunctuation => "remove_punctuation",
            Stage::RemoveAllDuplication => "remove_all_duplication",
            Stage::RemoveConsecutiveDuplication => "remove_consecutive_duplication",
            Stage::ExpandContractions => "expand_contractions",
            Stage::AbbreviationConverter => "abbreviation_converter",
            Stage::ReplaceCustom => "replace_custom",
            Stage::RemoveStopwords => "remove_stopwords",
            Stage::RejectBlank => "reject_blank",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Stage::ALL
            .iter()
            .copied()
            .find(|stage| stage.name() == s)
            .ok_or_else(|| ConfigError::UnknownStage(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// External stages
// ─────────────────────────────────────────────────────────────────────────────

/// A caller-supplied `text → text` stage (spelling correction,
/// lemmatization, a language-model pass, ...).  Returning `None` ends the run.
pub trait TextStage: Send + Sync {
    fn name(&self) -> &str;

    fn apply(&self, text: &str) -> Option<String>;
}

#[derive(Clone)]
enum Step {
    Builtin(Stage),
    External(Arc<dyn TextStage>),
}

impl Step {
    fn name(&self) -> &str {
        match self {
            Step::Builtin(stage) => stage.name(),
            Step::External(stage) => stage.name(),
        }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Builtin(stage) => write!(f, "{}", stage),
            Step::External(stage) => write!(f, "external:{}", stage.name()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

fn default_encoding() -> String {
    "utf-8".to_string()
}

/// JSON-loadable pipeline configuration.
///
/// ```json
/// {
///   "stages": ["remove_url", "to_lower", "remove_stopwords", "to_strip"],
///   "languages": ["english"],
///   "custom_replacements": { "k8s": "kubernetes" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessorConfig {
    /// Stages in execution order.
    pub stages: Vec<Stage>,

    /// Literal substrings deleted by `remove_special_char`.
    pub special_chars: Vec<String>,

    /// Whole-token replacements applied by `replace_custom`.
    pub custom_replacements: BTreeMap<String, String>,

    /// Stopword languages for `remove_stopwords` (`english`, `french`, ...).
    pub languages: Vec<String>,

    /// Extra words added to the stopword set.
    pub extra_stopwords: Vec<String>,

    /// Encoding used to decode byte input.
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            stages: Stage::DEFAULT_TWEET.to_vec(),
            special_chars: Vec::new(),
            custom_replacements: BTreeMap::new(),
            languages: Vec::new(),
            extra_stopwords: Vec::new(),
            encoding: default_encoding(),
        }
    }
}

impl PreprocessorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json(&json)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TextPreprocessor
// ─────────────────────────────────────────────────────────────────────────────

/// Result of a traced run: the final text and, per counting stage, the
/// number of matches it rewrote (in execution order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub text: String,
    pub counts: Vec<(String, usize)>,
}

impl Normalized {
    /// Total matches rewritten by the stage called `name`.
    pub fn matches(&self, name: &str) -> usize {
        self.counts.iter().filter(|(stage, _)| stage == name).map(|(_, n)| n).sum()
    }
}

/// Composed normalization pipeline; `Send + Sync`, share it across threads.
#[derive(Debug, Clone)]
pub struct TextPreprocessor {
    steps: Vec<Step>,
    special_chars: Vec<String>,
    custom: Option<Arc<LookupTable>>,
    stopwords: Option<Arc<StopwordSet>>,
    encoding: String,
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self {
            steps: Stage::DEFAULT_TWEET.iter().copied().map(Step::Builtin).collect(),
            special_chars: Vec::new(),
            custom: None,
            stopwords: None,
            encoding: default_encoding(),
        }
    }
}

impl TextPreprocessor {
    /// The default tweet pipeline ([`Stage::DEFAULT_TWEET`]).
    pub fn new() -> Self {
        Self::default()
    }

    /// A preprocessor with no stages; add them with [`with_stage`](Self::with_stage).
    pub fn empty() -> Self {
        Self { steps: Vec::new(), ..Self::default() }
    }

    /// Build from a configuration, using the bundled stopword lists.
    pub fn with_config(config: PreprocessorConfig) -> Result<Self, ConfigError> {
        Self::with_lexicon(config, &NltkLexicon)
    }

    /// Build from a configuration, taking stopwords from `lexicon`.
    pub fn with_lexicon<P>(config: PreprocessorConfig, lexicon: &P) -> Result<Self, ConfigError>
    where
        P: LexiconProvider + ?Sized,
    {
        if Encoding::for_label(config.encoding.trim().as_bytes()).is_none() {
            return Err(ConfigError::UnknownEncoding(config.encoding));
        }

        let custom = if config.custom_replacements.is_empty() {
            None
        } else {
            Some(Arc::new(LookupTable::whole_token(&config.custom_replacements)?))
        };

        let stopwords = if config.stages.contains(&Stage::RemoveStopwords) {
            Some(Arc::new(build_stopwords(&config, lexicon)?))
        } else {
            None
        };

        debug!(stages = config.stages.len(), custom = custom.is_some(), stopwords = stopwords.is_some(), "pipeline built");
        Ok(Self {
            steps: config.stages.into_iter().map(Step::Builtin).collect(),
            special_chars: config.special_chars,
            custom,
            stopwords,
            encoding: config.encoding,
        })
    }

    /// Append a built-in stage.
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.steps.push(Step::Builtin(stage));
        self
    }

    /// Append an external stage.
    pub fn with_text_stage<S: TextStage + 'static>(mut self, stage: S) -> Self {
        self.steps.push(Step::External(Arc::new(stage)));
        self
    }

    /// Set the stopword set used by [`Stage::RemoveStopwords`].
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = Some(Arc::new(stopwords));
        self
    }

    /// Set the table used by [`Stage::ReplaceCustom`].
    pub fn with_custom_replacements(mut self, table: LookupTable) -> Self {
        self.custom = Some(Arc::new(table));
        self
    }

    /// Set the literal substrings deleted by [`Stage::RemoveSpecialChar`].
    pub fn with_special_chars(mut self, special_chars: Vec<String>) -> Self {
        self.special_chars = special_chars;
        self
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.steps.iter().map(Step::name).collect()
    }

    pub fn process(&self, text: Option<&str>) -> Option<String> {
        self.process_traced(text).map(|n| n.text)
    }

    /// Decode raw input with the configured encoding, then process it.
    pub fn process_input(&self, input: RawInput<'_>) -> Option<String> {
        if let Some(text) = input.as_text() {
            return self.process(Some(text));
        }
        let text = preprocess::convert_to_unicode(input, &self.encoding)?;
        self.process(Some(&text))
    }

    pub fn process_batch<'a, I>(&self, texts: I) -> Vec<Option<String>>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        texts.into_iter().map(|t| self.process(t)).collect()
    }

    /// Like [`process`](Self::process), also reporting per-stage match counts.
    pub fn process_traced(&self, text: Option<&str>) -> Option<Normalized> {
        let mut current = text?.to_string();
        let mut counts = Vec::new();
        for step in &self.steps {
            let Some((text, matches)) = self.run_step(step, &current) else {
                debug!(stage = step.name(), "stage yielded no text, stopping");
                return None;
            };
            if let Some(matches) = matches {
                counts.push((step.name().to_string(), matches));
            }
            current = text;
        }
        Some(Normalized { text: current, counts })
    }

    fn run_step(&self, step: &Step, text: &str) -> Option<(String, Option<usize>)> {
        let stage = match step {
            Step::External(stage) => return stage.apply(text).map(|t| (t, None)),
            Step::Builtin(stage) => *stage,
        };
        let text = Some(text);
        let counted = |r: Option<Removal>| r.map(|r| (r.text, Some(r.matches)));
        let plain = |t: Option<String>| -> Option<(String, Option<usize>)> { t.map(|t| (t, None)) };

        match stage {
            Stage::ToStrip => plain(preprocess::to_strip(text)),
            Stage::RemoveManySpaces => plain(preprocess::remove_many_spaces(text)),
            Stage::ToLower => plain(preprocess::to_lower(text)),
            Stage::RemoveNumber => plain(preprocess::remove_number(text)),
            Stage::RemoveAnyChar => counted(preprocess::remove_any_char(text)),
            Stage::RemoveXml => counted(preprocess::remove_xml(text)),
            Stage::RemoveUrl => counted(preprocess::remove_url(text)),
            Stage::RemoveTwitterUsername => counted(preprocess::remove_twitter_username(text)),
            Stage::RemoveUsername => counted(preprocess::remove_username(text)),
            Stage::RemoveHashtag => counted(preprocess::remove_hashtag(text)),
            Stage::RemoveEmailAddress => counted(preprocess::remove_email_address(text)),
            Stage::RemoveEmoji => counted(preprocess::remove_emoji(text)),
            Stage::RemoveEmoticons => counted(preprocess::remove_emoticons(text)),
            Stage::ConvertEmoticons => counted(preprocess::convert_emoticons(text)),
            Stage::RemoveSpecialChar => counted(preprocess::remove_special_char(text, Some(&self.special_chars))),
            Stage::RemovePunctuation => plain(preprocess::remove_punctuation(text)),
            Stage::RemoveAllDuplication => plain(preprocess::remove_all_duplication(text)),
            Stage::RemoveConsecutiveDuplication => plain(preprocess::remove_consecutive_duplication(text)),
            Stage::ExpandContractions => plain(preprocess::expand_contractions(text)),
            Stage::AbbreviationConverter => plain(preprocess::abbreviation_converter(text)),
            Stage::ReplaceCustom => match &self.custom {
                Some(table) => counted(preprocess::replace_custom(text, table)),
                None => counted(text.map(Removal::untouched)),
            },
            Stage::RemoveStopwords => match &self.stopwords {
                Some(set) => plain(preprocess::remove_stopwords(text, set)),
                None => plain(text.map(str::to_string)),
            },
            Stage::RejectBlank => match preprocess::blank_checker(text) {
                Some(false) => plain(text.map(str::to_string)),
                _ => None,
            },
        }
    }
}

fn build_stopwords<P>(config: &PreprocessorConfig, lexicon: &P) -> Result<StopwordSet, ConfigError>
where
    P: LexiconProvider + ?Sized,
{
    let base = if config.languages.is_empty() {
        None
    } else {
        let set = stopwords::stopwords_nltk(lexicon, Some(config.languages.clone().into()))?;
        if set.is_none() {
            return Err(ConfigError::NoStopwords(config.languages.clone()));
        }
        set
    };
    if base.is_none() && config.extra_stopwords.is_empty() {
        return Err(ConfigError::NoStopwords(Vec::new()));
    }
    let extra = Some(config.extra_stopwords.clone().into());
    Ok(stopwords::add_word_to_stopwords_set(&base.unwrap_or_default(), extra))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct Shout;

    impl TextStage for Shout {
        fn name(&self) -> &str {
            "shout"
        }

        fn apply(&self, text: &str) -> Option<String> {
            Some(text.to_uppercase())
        }
    }

    struct Reject;

    impl TextStage for Reject {
        fn name(&self) -> &str {
            "reject"
        }

        fn apply(&self, _: &str) -> Option<String> {
            None
        }
    }

    fn config(json: &str) -> PreprocessorConfig {
        PreprocessorConfig::from_json(json).unwrap()
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextPreprocessor>();
    }

    #[test]
    fn test_stage_names_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(stage.name().parse::<Stage>().unwrap(), stage);
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.name()));
        }
        assert!(matches!("nope".parse::<Stage>(), Err(ConfigError::UnknownStage(_))));
    }

    #[test]
    fn test_none_short_circuits() {
        let pp = TextPreprocessor::new();
        assert_eq!(pp.process(None), None);
        assert_eq!(pp.process_input(RawInput::Other), None);
        assert_eq!(pp.process_input(RawInput::Null), None);
    }

    #[test]
    fn test_default_pipeline() {
        let pp = TextPreprocessor::new();
        let out = pp.process(Some("<b>I'm</b> so SO happy @alice! #blessed https://t.co/xyz")).unwrap();
        assert_eq!(out, "i am so happy !", "got: {}", out);
    }

    #[test]
    fn test_blank_is_rejected() {
        let pp = TextPreprocessor::new();
        assert_eq!(pp.process(Some("   ")), None);
        assert_eq!(pp.process(Some("@bob #tag")), None);
    }

    #[test]
    fn test_order_is_respected() {
        let lower_first = TextPreprocessor::empty().with_stage(Stage::ToLower).with_stage(Stage::AbbreviationConverter);
        let lower_last = TextPreprocessor::empty().with_stage(Stage::AbbreviationConverter).with_stage(Stage::ToLower);
        assert_eq!(lower_first.process(Some("U ok")).as_deref(), Some("you ok"));
        assert_eq!(lower_last.process(Some("U ok")).as_deref(), Some("u ok"));
    }

    #[test]
    fn test_external_stage_stops_run() {
        let pp = TextPreprocessor::empty()
            .with_text_stage(Reject)
            .with_text_stage(Shout);
        assert_eq!(pp.process(Some("hello")), None);

        let pp = TextPreprocessor::empty().with_stage(Stage::ToStrip).with_text_stage(Shout);
        assert_eq!(pp.process(Some("  hi  ")).as_deref(), Some("HI"));
        assert_eq!(pp.stage_names(), vec!["to_strip", "shout"]);
    }

    #[test]
    fn test_traced_counts() {
        let pp = TextPreprocessor::with_config(config(
            r#"{"stages": ["remove_xml", "remove_hashtag", "to_strip", "remove_hashtag"]}"#,
        ))
        .unwrap();
        let out = pp.process_traced(Some("<p>#a #b</p> text")).unwrap();
        assert_eq!(out.text, "text");
        assert_eq!(out.matches("remove_xml"), 2);
        assert_eq!(out.matches("remove_hashtag"), 2);
        assert_eq!(out.counts.len(), 3);
    }

    #[test]
    fn test_config_defaults() {
        let cfg = config("{}");
        assert_eq!(cfg, PreprocessorConfig::default());
        assert_eq!(cfg.encoding, "utf-8");
    }

    #[test]
    fn test_config_rejects_unknown_stage() {
        let err = PreprocessorConfig::from_json(r#"{"stages": ["remove_everything"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got: {}", err);
    }

    #[test]
    fn test_config_rejects_unknown_encoding() {
        let cfg = config(r#"{"encoding": "klingon-8"}"#);
        assert!(matches!(TextPreprocessor::with_config(cfg), Err(ConfigError::UnknownEncoding(_))));
    }

    #[test]
    fn test_special_chars_and_custom_replacements() {
        let pp = TextPreprocessor::with_config(config(
            r#"{
                "stages": ["remove_special_char", "replace_custom", "to_strip"],
                "special_chars": ["~", "^^"],
                "custom_replacements": {"k8s": "kubernetes", "tf": "terraform"}
            }"#,
        ))
        .unwrap();
        let out = pp.process_traced(Some("~ship k8s^^ with tf ")).unwrap();
        assert_eq!(out.text, "ship kubernetes with terraform");
        assert_eq!(out.matches("remove_special_char"), 2);
        assert_eq!(out.matches("replace_custom"), 2);
    }

    #[test]
    fn test_stopwords_from_config() {
        let pp = TextPreprocessor::with_config(config(
            r#"{"stages": ["to_lower", "remove_stopwords"], "languages": ["English"], "extra_stopwords": ["Rust"]}"#,
        ))
        .unwrap();
        assert_eq!(pp.process(Some("The pizza and the rust")).as_deref(), Some("pizza"));
    }

    #[test]
    fn test_stopwords_need_a_language() {
        let err = TextPreprocessor::with_config(config(r#"{"stages": ["remove_stopwords"], "languages": ["klingon"]}"#))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoStopwords(ref langs) if langs == &["klingon".to_string()]), "got: {}", err);

        let err = TextPreprocessor::with_config(config(r#"{"stages": ["remove_stopwords"]}"#)).unwrap_err();
        assert!(matches!(err, ConfigError::NoStopwords(_)), "got: {}", err);
    }

    #[test]
    fn test_process_input_decodes_bytes() {
        let pp = TextPreprocessor::with_config(config(r#"{"stages": ["to_strip"], "encoding": "latin1"}"#)).unwrap();
        assert_eq!(pp.process_input(RawInput::Bytes(b" caf\xe9 ")).as_deref(), Some("café"));
        assert_eq!(pp.process_input(RawInput::Text(" tea ")).as_deref(), Some("tea"));
        assert_eq!(pp.process_input(RawInput::Null), None);
        assert_eq!(pp.process_input(RawInput::Other), None);
    }

    #[test]
    fn test_batch() {
        let pp = TextPreprocessor::empty().with_stage(Stage::ToLower);
        let out = pp.process_batch([Some("A"), None, Some("b")]);
        assert_eq!(out, vec![Some("a".to_string()), None, Some("b".to_string())]);
    }
}
