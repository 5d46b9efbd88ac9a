pub mod config;
pub mod core;
pub mod logging;

pub use config::{Config, ThemeChoice, ViewMode};
pub use crate::core::inventory::{Inventory, Part, PartDraft, PartFilter, Project};

#[cfg(feature = "gui")]
pub mod gui;
