//! `README.md` producer.

use super::{ArtifactKind, GeneratedArtifact};
use crate::constants::{DEFAULT_PLUGINS_DIR, FRAMEWORK_NAME};
use crate::error::Result;
use crate::naming::DerivedIdentifiers;
use crate::renderer::TemplateRenderer;
use crate::request::GenerationRequest;

const TEMPLATE: &str = include_str!("../../templates/README.md.j2");

/// Description used in the documentation when the request carries none.
pub fn default_description(raw_name: &str) -> String {
    format!("A {FRAMEWORK_NAME} plugin for {raw_name}")
}

pub fn produce(
    ids: &DerivedIdentifiers,
    request: &GenerationRequest,
    engine: &dyn TemplateRenderer,
) -> Result<GeneratedArtifact> {
    let description = request
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map_or_else(|| default_description(&request.raw_name), str::to_string);

    let context = serde_json::json!({
        "class_identifier": ids.class_identifier,
        "slug": ids.slug,
        "description": description,
        "framework": FRAMEWORK_NAME,
        "plugins_dir": DEFAULT_PLUGINS_DIR,
    });

    let content = engine.render(TEMPLATE, &context)?;
    Ok(GeneratedArtifact::new(ArtifactKind::Readme, content))
}
