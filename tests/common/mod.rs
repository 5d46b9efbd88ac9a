mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from partsdash for tests
pub use partsdash::core::inventory::{
    ALL_CATEGORIES, CategoryFilter, Condition, Inventory, NewPart, Part, PartDraft, PartFilter,
    PartId, PartRepository, Project, ProjectId, ProjectRepository, ProjectStats, RequiredField,
    ValidationError, categories, filter_parts, project_parts, project_stats,
};
