//! # tweetnorm
//!
//! Deterministic normalization of noisy user-generated text (tweets, social
//! posts) into a canonical form for tokenization or embedding.
//!
//! ## Quick start
//!
//! ```
//! use tweetnorm::TextPreprocessor;
//!
//! let pp = TextPreprocessor::new();
//! let out = pp.process(Some("I'm sooo happy @alice!! #blessed https://t.co/xyz"));
//! assert_eq!(out.as_deref(), Some("i am sooo happy !!"));
//! ```
//!
//! Individual stages are plain functions over `Option<&str>`:
//!
//! ```
//! use tweetnorm::preprocess::{remove_url, to_strip};
//!
//! let r = remove_url(Some("see www.example.com now")).unwrap();
//! assert_eq!(r.matches, 1);
//! assert_eq!(to_strip(Some(&r.text)).as_deref(), Some("see now"));
//! ```
//!
//! ## Configured pipelines
//!
//! ```
//! use tweetnorm::{PreprocessorConfig, TextPreprocessor};
//!
//! let config = PreprocessorConfig::from_json(r#"{
//!     "stages": ["to_lower", "remove_stopwords", "to_strip"],
//!     "languages": ["english"]
//! }"#).unwrap();
//! let pp = TextPreprocessor::with_config(config).unwrap();
//! assert_eq!(pp.process(Some("The pizza and the pasta")).as_deref(), Some("pizza pasta"));
//! ```
//!
//! ## Layout
//! 1. [`registry`]: every compiled pattern and lookup table, built once.
//! 2. [`preprocess`]: the stage functions.
//! 3. [`stopwords`]: stopword sets from a lexicon provider.
//! 4. [`pipeline`]: ordered composition, JSON configuration.
//! 5. [`resource`] / `download`: language-model pipeline selection.
//! 6. [`ffi`]: C ABI over the pipeline.

// Pipeline packages come from the HuggingFace Hub on desktop only; hf-hub's
// TLS stack is not cross-compiled for iOS/Android.
#[cfg(not(any(target_os = "ios", target_os = "android")))]
pub mod download;

// C FFI: tweetnorm_pipeline_new / process / free.
pub mod ffi;

pub mod error;
pub mod input;
pub mod lexicon;
pub mod pipeline;
pub mod preprocess;
pub mod registry;
pub mod resource;
pub mod stopwords;

// ─── Re-exports for convenience ─────────────────────────────────────────────

pub use error::{ConfigError, LexiconError, PatternError, ProviderError};
pub use input::{RawInput, Removal};
pub use pipeline::{Normalized, PreprocessorConfig, Stage, TextPreprocessor, TextStage};
pub use registry::{LookupTable, PatternRegistry};
pub use stopwords::{StopwordSet, WordList};
