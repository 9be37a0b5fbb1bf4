//! Language-resource selection.
//!
//! Maps a language and a size preference to the name of a pretrained
//! language-model pipeline package (`en_core_web_sm`, `de_core_news_lg`, ...)
//! and loads it through a [`ModelProvider`], fetching it at most once when it
//! is not available locally.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ProviderError, UnknownModelSize};

/// Language name → resource code.
#[rustfmt::skip]
pub const LANGUAGE_CODES: &[(&str, &str)] = &[
    ("Catalan", "ca"), ("Chinese", "zh"), ("Croatian", "hr"), ("Danish", "da"), ("Dutch", "nl"),
    ("English", "en"), ("Finnish", "fi"), ("French", "fr"), ("German", "de"), ("Greek", "el"),
    ("Italian", "it"), ("Japanese", "ja"), ("Korean", "ko"), ("Lithuanian", "lt"),
    ("Macedonian", "mk"), ("Norwegian Bokmål", "nb"), ("Polish", "pl"), ("Portuguese", "pt"),
    ("Romanian", "ro"), ("Russian", "ru"), ("Spanish", "es"), ("Swedish", "sv"),
    ("Ukrainian", "uk"), ("Multi-language", "xx"),
];

/// Resource code for a language name (`English` → `en`).  Codes are accepted
/// as-is; names match case-insensitively.
pub fn language_code(language: &str) -> Option<&'static str> {
    let language = language.trim();
    LANGUAGE_CODES
        .iter()
        .find(|(name, code)| *code == language || name.to_lowercase() == language.to_lowercase())
        .map(|(_, code)| *code)
}

// ─────────────────────────────────────────────────────────────────────────────
// Source category / size
// ─────────────────────────────────────────────────────────────────────────────

/// Corpus a language's pipelines were trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceCategory {
    Web,
    News,
    Wiki,
}

impl SourceCategory {
    pub fn for_code(code: &str) -> Option<Self> {
        match code {
            "en" | "zh" => Some(SourceCategory::Web),
            "ca" | "hr" | "da" | "nl" | "fi" | "fr" | "de" | "el" | "it" | "ja" | "ko" | "lt" | "mk" | "nb"
            | "pl" | "pt" | "ro" | "ru" | "es" | "sv" | "uk" => Some(SourceCategory::News),
            "xx" => Some(SourceCategory::Wiki),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceCategory::Web => "web",
            SourceCategory::News => "news",
            SourceCategory::Wiki => "wiki",
        }
    }
}

/// Pipeline size preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelSize {
    Small,
    Medium,
    Large,
    Transformer,
}

impl ModelSize {
    pub const ALL: [ModelSize; 4] = [ModelSize::Small, ModelSize::Medium, ModelSize::Large, ModelSize::Transformer];

    /// Suffix used in package names.
    pub fn suffix(self) -> &'static str {
        match self {
            ModelSize::Small => "sm",
            ModelSize::Medium => "md",
            ModelSize::Large => "lg",
            ModelSize::Transformer => "trf",
        }
    }
}

impl FromStr for ModelSize {
    type Err = UnknownModelSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "small" => Ok(ModelSize::Small),
            "medium" => Ok(ModelSize::Medium),
            "large" => Ok(ModelSize::Large),
            "transformer" => Ok(ModelSize::Transformer),
            other => Err(UnknownModelSize(other.to_string())),
        }
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
            ModelSize::Transformer => "transformer",
        })
    }
}

/// Package name for a language and size, or `None` when there is no such
/// package.
///
/// `{code}_core_{web|news}_{size}`; the multilingual pipeline only exists as
/// `xx_ent_wiki_sm`.
pub fn resource_name(language: &str, size: ModelSize) -> Option<String> {
    let code = language_code(language)?;
    match SourceCategory::for_code(code)? {
        SourceCategory::Wiki => (size == ModelSize::Small).then(|| format!("{}_ent_wiki_sm", code)),
        source => Some(format!("{}_core_{}_{}", code, source.as_str(), size.suffix())),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────────────────────────────────────

/// Source of loaded language-model pipelines, addressed by package name.
pub trait ModelProvider {
    type Handle;

    /// Load a locally available package.
    fn load(&self, name: &str) -> Result<Self::Handle, ProviderError>;

    /// Make a package available locally.
    fn fetch(&self, name: &str) -> Result<(), ProviderError>;
}

/// Resolve and load the pipeline for `language` at `size`.
///
/// `Ok(None)` when the language or size is unsupported.  A failed load is
/// followed by exactly one fetch and one more load; the second failure is
/// returned.
pub fn select_pipeline<P>(provider: &P, language: &str, size: &str) -> Result<Option<P::Handle>, ProviderError>
where
    P: ModelProvider + ?Sized,
{
    let Ok(size) = size.parse::<ModelSize>() else {
        debug!(size, "unsupported pipeline size");
        return Ok(None);
    };
    let Some(name) = resource_name(language, size) else {
        debug!(language, %size, "no pipeline for language");
        return Ok(None);
    };

    match provider.load(&name) {
        Ok(handle) => Ok(Some(handle)),
        Err(e) => {
            warn!(pipeline = %name, error = %e, "pipeline not loadable, fetching and retrying");
            info!(pipeline = %name, "fetching pipeline");
            provider.fetch(&name)?;
            provider.load(&name).map(Some)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
