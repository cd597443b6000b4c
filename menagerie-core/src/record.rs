use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Unique identifier for an animal record.
///
/// Assigned by the record store on create; never supplied by clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    /// Mint a fresh id in the store's `animal:{uuid}` form.
    pub fn new() -> Self {
        Self(format!("animal:{}", Uuid::new_v4()))
    }

    /// Create from an existing string.
    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted animal record as the record store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub id: RecordId,
    pub name: String,
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl AnimalRecord {
    /// The editable fields of this record, for pre-populating an edit form.
    pub fn draft(&self) -> AnimalDraft {
        AnimalDraft {
            name: self.name.clone(),
            species: self.species.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// The editable fields of an animal record: the payload for create and
/// update. `id` is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct AnimalDraft {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "species is required"))]
    pub species: String,

    #[validate(url(message = "image_url must be a valid URL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl AnimalDraft {
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Normalize a whitespace-only `image_url` to absent so "either a URL or
    /// empty" holds before validation runs.
    pub fn normalized(mut self) -> Self {
        if let Some(url) = &self.image_url {
            if url.trim().is_empty() {
                self.image_url = None;
            }
        }
        self
    }
}
