//! Error types for the fallible seams of the crate.
//!
//! Normalization stages never error: invalid input is reported as `None`.
//! The types below cover what can genuinely fail: building patterns from
//! caller data, talking to external providers, and honoring a pipeline
//! configuration.

use thiserror::Error;

/// A pattern could not be compiled.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern: {0}")]
    Plain(#[from] regex::Error),

    #[error("invalid look-around pattern: {0}")]
    Fancy(#[from] fancy_regex::Error),
}

/// Failures reported by a stopword lexicon provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// The lexicon for `language` is not present locally.
    #[error("stopword lexicon for '{language}' is missing")]
    ResourceMissing { language: String },

    /// Fetching the lexicon data failed.
    #[error("stopword lexicon download failed: {reason}")]
    DownloadFailed { reason: String },
}

/// Failures reported by a language-model provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The resource is not available locally.
    #[error("language resource '{name}' is not available")]
    Unavailable { name: String },

    /// Fetching the resource from its source failed.
    #[error("failed to fetch language resource '{name}': {reason}")]
    FetchFailed { name: String, reason: String },

    /// The resource exists but its metadata could not be read.
    #[error("language resource '{name}' is corrupt: {reason}")]
    Corrupt { name: String, reason: String },
}

/// A pipeline configuration that cannot be honored.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot parse pipeline configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read pipeline configuration '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("custom replacement table: {0}")]
    Pattern(#[from] PatternError),

    #[error("unknown stage '{0}'")]
    UnknownStage(String),

    #[error("unknown encoding '{0}'")]
    UnknownEncoding(String),

    /// `remove_stopwords` was requested but no configured language is supported.
    #[error("no supported stopword language in {0:?}")]
    NoStopwords(Vec<String>),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// A model size outside `small | medium | large | transformer`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown model size '{0}' (expected small, medium, large or transformer)")]
pub struct UnknownModelSize(pub String);
