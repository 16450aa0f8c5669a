//! Producers of the four plugin artifacts.
//!
//! Each producer is a pure function of the derived identifiers and the
//! generation request; no producer reads another producer's output.

use log::debug;

use crate::constants::{BUILD_CONFIG_FILE, MANIFEST_FILE, README_FILE, SOURCE_ENTRY_FILE};
use crate::error::Result;
use crate::naming::DerivedIdentifiers;
use crate::renderer::TemplateRenderer;
use crate::request::GenerationRequest;

pub mod build_config;
pub mod manifest;
pub mod readme;
pub mod source_stub;

/// The kind of a generated artifact, which fixes its location in the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Manifest,
    BuildConfig,
    SourceStub,
    Readme,
}

impl ArtifactKind {
    /// Path of the artifact relative to the plugin directory.
    pub fn relative_path(self) -> &'static str {
        match self {
            ArtifactKind::Manifest => MANIFEST_FILE,
            ArtifactKind::BuildConfig => BUILD_CONFIG_FILE,
            ArtifactKind::SourceStub => SOURCE_ENTRY_FILE,
            ArtifactKind::Readme => README_FILE,
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ArtifactKind::Manifest => "manifest",
            ArtifactKind::BuildConfig => "build config",
            ArtifactKind::SourceStub => "source stub",
            ArtifactKind::Readme => "readme",
        };
        write!(f, "{label}")
    }
}

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, content: String) -> Self {
        Self { kind, content }
    }

    pub fn relative_path(&self) -> &'static str {
        self.kind.relative_path()
    }
}

/// The complete set of artifacts for one plugin.
#[derive(Debug, Clone)]
pub struct GeneratedArtifactSet {
    pub manifest: GeneratedArtifact,
    pub build_config: GeneratedArtifact,
    pub source_stub: GeneratedArtifact,
    pub readme: GeneratedArtifact,
}

impl GeneratedArtifactSet {
    /// Artifacts in write order: manifest, build config, source stub, readme.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        [&self.manifest, &self.build_config, &self.source_stub, &self.readme].into_iter()
    }
}

/// Runs all four producers in a fixed sequence.
pub fn produce_all(
    ids: &DerivedIdentifiers,
    request: &GenerationRequest,
    engine: &dyn TemplateRenderer,
) -> Result<GeneratedArtifactSet> {
    debug!("Producing artifacts for '{}'.", ids.slug);

    Ok(GeneratedArtifactSet {
        manifest: manifest::produce(ids, request)?,
        build_config: build_config::produce()?,
        source_stub: source_stub::produce(ids, engine)?,
        readme: readme::produce(ids, request, engine)?,
    })
}

/// Serializes a structured artifact as two-space indented JSON with a final newline.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
