use crate::{config::Config, core::inventory::Inventory, gui::images::ImageCache};

/// Owned by the app; screens only ever see `&AppState`.
#[derive(Debug)]
pub struct AppState {
    pub inventory: Inventory,
    pub config: Config,
    pub images: ImageCache,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let inventory = if config.seed_demo_data {
            Inventory::with_demo_data()
        } else {
            Inventory::new()
        };
        Self {
            inventory,
            config,
            images: ImageCache::default(),
        }
    }
}
