//! User interaction for the generator.

use dialoguer::Confirm;

use crate::error::{Error, Result};

/// Asks the user yes/no questions.
pub trait Prompter {
    /// Asks for confirmation, returning `true` right away when `skip` is set.
    ///
    /// # Arguments
    /// * `skip` - Treat the question as already answered with yes
    /// * `prompt` - Question shown to the user
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()))
    }
}
