pub mod add_part;
pub mod inventory;
pub mod projects;

use iced::{Element, Task};

use crate::gui::{AppState, widgets::Page};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

/// A page of the app. Screens only read the shared state; anything that
/// changes the store goes up as a `ParentMessage`.
pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &AppState) -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Inventory(inventory::InventoryScreen),
    Projects(projects::ProjectsScreen),
}

impl ScreenData {
    pub fn for_page(page: Page, state: &AppState) -> Self {
        match page {
            Page::Inventory => ScreenData::Inventory(inventory::InventoryScreen::new(state.config.view_mode)),
            Page::Projects => ScreenData::Projects(projects::ProjectsScreen),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            ScreenData::Inventory(_) => Page::Inventory,
            ScreenData::Projects(_) => Page::Projects,
        }
    }
}
