//! Template rendering for the textual plugin artifacts.
//! Built-in templates are embedded into the binary and rendered with MiniJinja.
use crate::error::Result;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer whose output keeps the template's trailing newline.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::Unknown` if the template fails to parse or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_render_keeps_trailing_newline() {
        let renderer = MiniJinjaRenderer::new();
        let context = serde_json::json!({ "name": "KotPrinterPlugin" });

        let result = renderer.render("# {{ name }}\n", &context).unwrap();
        assert_eq!(result, "# KotPrinterPlugin\n");
    }

    #[test]
    fn test_render_syntax_error_is_unknown() {
        let renderer = MiniJinjaRenderer::new();
        let result = renderer.render("{{ name", &serde_json::json!({}));
        assert!(matches!(result, Err(Error::Unknown(_))));
    }
}
