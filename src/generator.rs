//! Plugin generation orchestration.
//! Combines name derivation, artifact production and materialization.

use std::path::PathBuf;

use log::{debug, info};

use crate::artifacts::produce_all;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::materializer::materialize;
use crate::naming::derive;
use crate::prompt::Prompter;
use crate::renderer::MiniJinjaRenderer;
use crate::request::GenerationRequest;

/// Generates a plugin skeleton under `settings.plugins_root`.
///
/// # Arguments
/// * `settings` - Plugins root and overwrite policy
/// * `request` - Plugin name and optional metadata
/// * `prompt` - Asked before replacing an existing plugin directory
///
/// # Returns
/// * `Result<PathBuf>` - The plugin directory
///
/// # Flow
/// 1. Validates the name; nothing is touched if it is invalid
/// 2. Confirms overwriting an existing plugin directory unless forced
/// 3. Produces the four artifacts
/// 4. Writes them to disk
pub fn generate(
    settings: &Settings,
    request: &GenerationRequest,
    prompt: &dyn Prompter,
) -> Result<PathBuf> {
    let ids = derive(&request.raw_name)?;
    let plugin_dir = settings.plugins_root.join(&ids.slug);

    if plugin_dir.exists() {
        let overwrite = prompt.confirm(
            settings.force,
            format!("Plugin directory '{}' already exists. Overwrite it?", plugin_dir.display()),
        )?;
        if !overwrite {
            return Err(Error::PluginExists { plugin_dir });
        }
        debug!("Overwriting existing plugin directory '{}'.", plugin_dir.display());
    }

    let engine = MiniJinjaRenderer::new();
    let artifacts = produce_all(&ids, request, &engine)?;

    for path in materialize(&settings.plugins_root, &ids.slug, &artifacts)? {
        info!("Created '{}'", path.display());
    }

    Ok(plugin_dir)
}
