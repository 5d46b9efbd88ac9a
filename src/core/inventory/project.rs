use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::inventory::part::Part;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total_parts: usize,
    pub total_quantity: u64,
}

pub trait ProjectRepository {
    fn get_projects(&self) -> &[Project];
    fn get_project_by_id(&self, id: &ProjectId) -> Option<&Project>;
    fn get_project_parts(&self, id: &ProjectId) -> Vec<&Part>;
    fn get_project_stats(&self, id: &ProjectId) -> ProjectStats;
}

/// Parts allocated to `project_id`, in store order. Dangling ids match nothing.
pub fn project_parts<'a>(parts: &'a [Part], project_id: &ProjectId) -> Vec<&'a Part> {
    parts
        .iter()
        .filter(|part| part.project_id.as_ref() == Some(project_id))
        .collect()
}

pub fn project_stats(parts: &[Part], project_id: &ProjectId) -> ProjectStats {
    project_parts(parts, project_id)
        .into_iter()
        .fold(ProjectStats::default(), |stats, part| ProjectStats {
            total_parts: stats.total_parts + 1,
            total_quantity: stats.total_quantity + u64::from(part.quantity),
        })
}
