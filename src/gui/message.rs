use iced::widget::image;

use crate::gui::{
    screens::{ScreenMessage, inventory::InventoryScreen, projects::ProjectsScreen},
    widgets::Page,
};

#[derive(Debug, Clone)]
pub enum Message {
    Inventory(ScreenMessage<InventoryScreen>),
    Projects(ScreenMessage<ProjectsScreen>),
    Navigate(Page),
    DismissToast(u64),
    ImageFetched(String, Result<image::Handle, String>),
}
