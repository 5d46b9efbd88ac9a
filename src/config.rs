use std::time::Duration;

use clap::ValueEnum;

/// How the inventory screen lays out the filtered parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// Wrapped grid of cards
    #[default]
    Grid,
    /// One compact row per part
    List,
    /// Full-width cards, one per line
    Feed,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::List, ViewMode::Feed];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
            ViewMode::Feed => "Feed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub view_mode: ViewMode,
    pub theme: ThemeChoice,
    /// Start with the demo parts instead of an empty store.
    pub seed_demo_data: bool,
    pub toast_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Grid,
            theme: ThemeChoice::Dark,
            seed_demo_data: true,
            toast_duration: Duration::from_secs(3),
        }
    }
}
