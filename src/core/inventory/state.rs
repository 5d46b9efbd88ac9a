use time::OffsetDateTime;

use crate::core::inventory::{part::{Part, PartId}, project::Project};

pub(super) struct InventoryState {
    pub(super) parts: Vec<Part>,
    pub(super) projects: Vec<Project>,
    last_issued_id: i128,
}

impl std::fmt::Debug for InventoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryState")
            .field("parts", &self.parts.len())
            .field("projects", &self.projects.len())
            .field("last_issued_id", &self.last_issued_id)
            .finish()
    }
}

impl InventoryState {
    pub(super) fn new(parts: Vec<Part>, projects: Vec<Project>) -> Self {
        // Numeric ids already present count as issued.
        let last_issued_id = parts
            .iter()
            .filter_map(|part| part.id.as_str().parse::<i128>().ok())
            .max()
            .unwrap_or(0);
        Self {
            parts,
            projects,
            last_issued_id,
        }
    }

    /// Creation time in Unix milliseconds, bumped past the last issued id so
    /// ids stay strictly increasing within one millisecond.
    pub(super) fn issue_id(&mut self) -> PartId {
        let now_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        let id = now_ms.max(self.last_issued_id + 1);
        self.last_issued_id = id;
        PartId::new(id.to_string())
    }

    pub(super) fn position_of(&self, id: &PartId) -> Option<usize> {
        self.parts.iter().position(|part| part.id == *id)
    }
}
