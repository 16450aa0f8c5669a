//! `src/index.ts` producer.

use super::{ArtifactKind, GeneratedArtifact};
use crate::constants::PACKAGE_SCOPE;
use crate::error::Result;
use crate::naming::DerivedIdentifiers;
use crate::renderer::TemplateRenderer;

const TEMPLATE: &str = include_str!("../../templates/index.ts.j2");

/// Renders the plugin class implementing the `Plugin` contract.
///
/// Only the validated class identifier is interpolated into code.
pub fn produce(
    ids: &DerivedIdentifiers,
    engine: &dyn TemplateRenderer,
) -> Result<GeneratedArtifact> {
    let context = serde_json::json!({
        "scope": PACKAGE_SCOPE,
        "class_identifier": ids.class_identifier,
    });

    let content = engine.render(TEMPLATE, &context)?;
    Ok(GeneratedArtifact::new(ArtifactKind::SourceStub, content))
}
