//! HuggingFace Hub pipeline provider.
//!
//! Pipeline packages are published as HuggingFace repositories
//! (`spacy/en_core_web_sm`, ...).  [`HubModelProvider`] treats a package as
//! loaded when its `meta.json` is in the local hub cache, and fetches that
//! file from the hub on request.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hf_hub::{api::sync::Api, Cache};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::ProviderError, resource::{self, ModelProvider}};

/// Hub namespace the pipeline packages live under.
pub const DEFAULT_NAMESPACE: &str = "spacy";

/// Metadata file every pipeline package carries.
pub const META_FILE: &str = "meta.json";

// ─────────────────────────────────────────────────────────────────────────────
// meta.json schema
// ─────────────────────────────────────────────────────────────────────────────

/// Deserialised `meta.json` of a pipeline package.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PipelineMeta {
    /// Resource code, e.g. `"en"`.
    pub lang: String,

    /// Package name without the language prefix, e.g. `"core_web_sm"`.
    pub name: String,

    pub version: String,

    #[serde(default)]
    pub description: String,

    /// Component names in execution order.
    #[serde(default)]
    pub pipeline: Vec<String>,
}

/// A pipeline package available in the local cache.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelinePackage {
    /// Full package name, e.g. `"en_core_web_sm"`.
    pub name: String,
    /// Location of the cached `meta.json`.
    pub path: PathBuf,
    pub meta: PipelineMeta,
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn read_meta(path: &Path) -> Result<PipelineMeta> {
    let bytes = std::fs::read(path).with_context(|| format!("Cannot read meta: {}", path.display()))?;
    serde_json::from_slice(&bytes).context("Failed to parse meta.json")
}

/// Download a single file from a HuggingFace repository.
fn hf_download(repo_id: &str, filename: &str) -> Result<PathBuf> {
    let api = Api::new().context("Failed to initialise HuggingFace Hub client")?;
    api.model(repo_id.to_string())
        .get(filename)
        .with_context(|| format!("Failed to download '{}' from '{}'", filename, repo_id))
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────────────────────────────────────

/// [`ModelProvider`] backed by the HuggingFace Hub and its local cache
/// (`~/.cache/huggingface/hub` by default).
pub struct HubModelProvider {
    namespace: String,
    cache: Cache,
}

impl Default for HubModelProvider {
    fn default() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }
}

impl HubModelProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(namespace: &str) -> Self {
        Self { namespace: namespace.trim_end_matches('/').to_string(), cache: Cache::default() }
    }

    /// Repository holding the package (`en_core_web_sm` → `spacy/en_core_web_sm`).
    pub fn repo_id(&self, name: &str) -> String {
        format!("{}/{}", self.namespace, name)
    }
}

impl ModelProvider for HubModelProvider {
    type Handle = PipelinePackage;

    fn load(&self, name: &str) -> Result<PipelinePackage, ProviderError> {
        let path = self
            .cache
            .model(self.repo_id(name))
            .get(META_FILE)
            .ok_or_else(|| ProviderError::Unavailable { name: name.to_string() })?;
        let meta = read_meta(&path)
            .map_err(|e| ProviderError::Corrupt { name: name.to_string(), reason: format!("{:#}", e) })?;
        Ok(PipelinePackage { name: name.to_string(), path, meta })
    }

    fn fetch(&self, name: &str) -> Result<(), ProviderError> {
        let repo_id = self.repo_id(name);
        info!(repo = %repo_id, "downloading pipeline metadata");
        hf_download(&repo_id, META_FILE)
            .map(|_| ())
            .map_err(|e| ProviderError::FetchFailed { name: name.to_string(), reason: format!("{:#}", e) })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve, fetch if needed, and load a pipeline package from the hub.
///
/// `Ok(None)` when there is no package for the language and size.
///
/// # Example
/// ```no_run
/// let package = tweetnorm::download::load_from_hub("English", "small").unwrap();
/// if let Some(package) = package {
///     println!("{} {}", package.name, package.meta.version);
/// }
/// ```
pub fn load_from_hub(language: &str, size: &str) -> Result<Option<PipelinePackage>> {
    let provider = HubModelProvider::new();
    resource::select_pipeline(&provider, language, size)
        .with_context(|| format!("Failed to load {} pipeline for '{}'", size, language))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
