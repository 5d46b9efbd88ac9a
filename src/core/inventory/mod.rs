mod draft;
mod filter;
mod model;
mod part;
mod project;
mod seed;
mod state;

use state::InventoryState;
use tracing::debug;

pub use draft::{PartDraft, RequiredField, ValidationError};
pub use filter::{ALL_CATEGORIES, CategoryFilter, PartFilter, categories, filter_parts};
pub use model::{CATEGORY_SUGGESTIONS, Condition, MAKE_SUGGESTIONS, ParseConditionError};
pub use part::{NewPart, Part, PartId, PartRepository, PendingDeletion};
pub use project::{
    Project, ProjectId, ProjectRepository, ProjectStats, project_parts, project_stats,
};

/// In-memory part store plus the read-only project list.
#[derive(Debug)]
pub struct Inventory {
    state: InventoryState,
}

impl Inventory {
    /// An empty store that still knows the demo projects.
    pub fn new() -> Self {
        Self {
            state: InventoryState::new(Vec::new(), seed::demo_projects()),
        }
    }

    /// The three demo parts and three demo projects.
    pub fn with_demo_data() -> Self {
        Self {
            state: InventoryState::new(seed::demo_parts(), seed::demo_projects()),
        }
    }

    pub fn len(&self) -> usize {
        self.state.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.parts.is_empty()
    }

    pub fn filter(&self, filter: &PartFilter) -> Vec<&Part> {
        filter.apply(&self.state.parts)
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.state.parts)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PartRepository for Inventory {
    fn get_parts(&self) -> &[Part] {
        &self.state.parts
    }

    fn get_part_by_id(&self, id: &PartId) -> Option<&Part> {
        self.state.parts.iter().find(|part| part.id == *id)
    }

    fn add_part(&mut self, part: NewPart) -> &Part {
        let id = self.state.issue_id();
        debug!(%id, name = %part.name, "adding part");
        self.state.parts.insert(0, Part::from_new(id, part));
        &self.state.parts[0]
    }

    fn request_delete(&self, id: &PartId) -> Option<PendingDeletion> {
        self.get_part_by_id(id).map(|part| PendingDeletion {
            id: part.id.clone(),
            name: part.name.clone(),
            _guard: (),
        })
    }

    fn delete_part(&mut self, pending: PendingDeletion) -> Option<Part> {
        let Some(index) = self.state.position_of(&pending.id) else {
            debug!(id = %pending.id, "part already gone");
            return None;
        };
        debug!(id = %pending.id, "deleting part");
        Some(self.state.parts.remove(index))
    }
}

impl ProjectRepository for Inventory {
    fn get_projects(&self) -> &[Project] {
        &self.state.projects
    }

    fn get_project_by_id(&self, id: &ProjectId) -> Option<&Project> {
        self.state.projects.iter().find(|project| project.id == *id)
    }

    fn get_project_parts(&self, id: &ProjectId) -> Vec<&Part> {
        project_parts(&self.state.parts, id)
    }

    fn get_project_stats(&self, id: &ProjectId) -> ProjectStats {
        project_stats(&self.state.parts, id)
    }
}
