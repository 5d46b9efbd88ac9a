use std::fmt;

use serde::Serialize;

use crate::core::inventory::{
    draft::{PartDraft, ValidationError},
    model::Condition,
    project::ProjectId,
};

/// Opaque part identifier. Issued by the store, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PartId(String);

impl PartId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: PartId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub location: String,
    pub quantity: u32,
    pub condition: Condition,
    pub category: String,
    pub make: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    #[serde(skip)]
    pub(super) _guard: (),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPart {
    pub name: String,
    pub sku: Option<String>,
    pub location: String,
    pub quantity: u32,
    pub condition: Condition,
    pub category: String,
    pub make: String,
    pub model: String,
    pub image_url: Option<String>,
    pub project_id: Option<ProjectId>,
}

impl Part {
    pub(super) fn from_new(id: PartId, part: NewPart) -> Self {
        Self {
            id,
            name: part.name,
            sku: part.sku,
            location: part.location,
            quantity: part.quantity,
            condition: part.condition,
            category: part.category,
            make: part.make,
            model: part.model,
            image_url: part.image_url,
            project_id: part.project_id,
            _guard: (),
        }
    }

    /// "Make Model", the vehicle line shown on cards.
    pub fn vehicle(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// First half of the two-stage delete. Only the store hands these out, so a
/// part can't be removed without going through [`PartRepository::request_delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub id: PartId,
    pub name: String,
    pub(super) _guard: (),
}

pub trait PartRepository {
    fn get_parts(&self) -> &[Part];
    fn get_part_by_id(&self, id: &PartId) -> Option<&Part>;
    /// Assigns a fresh id and places the part at the front of the store.
    fn add_part(&mut self, part: NewPart) -> &Part;
    fn request_delete(&self, id: &PartId) -> Option<PendingDeletion>;
    /// Returns the removed part, or `None` if it was already gone.
    fn delete_part(&mut self, pending: PendingDeletion) -> Option<Part>;

    /// Validates the draft and adds it. The store is untouched on error.
    fn create_part(&mut self, draft: &PartDraft) -> Result<&Part, ValidationError> {
        let part = draft.validate()?;
        Ok(self.add_part(part))
    }
}
