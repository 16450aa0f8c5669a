//! Caller input for a single generation.

/// What the caller asked for: a raw plugin name plus optional metadata.
///
/// Metadata is passed through literally; no trimming or normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    pub raw_name: String,
    pub description: Option<String>,
    pub author: Option<String>,
}

impl GenerationRequest {
    pub fn new<S: Into<String>>(raw_name: S) -> Self {
        Self {
            raw_name: raw_name.into(),
            ..Default::default()
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_author<S: Into<String>>(mut self, author: S) -> Self {
        self.author = Some(author.into());
        self
    }
}
