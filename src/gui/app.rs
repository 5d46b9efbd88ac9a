use std::time::Duration;

use iced::{Element, Task, Theme, widget::stack};
use tracing::{debug, info, warn};

use crate::{
    config::{Config, ThemeChoice},
    core::inventory::PartRepository,
    gui::{
        AppState, Message,
        images,
        screens::{
            Screen, ScreenData, ScreenMessage,
            inventory::InventoryParentMessage,
            projects::ProjectsParentMessage,
        },
        toast::{Toast, Toasts},
        widgets::Page,
    },
};

pub struct PartsDashApp {
    state: AppState,
    screen: ScreenData,
    toasts: Toasts,
}

/// Launch the dashboard window and block until it closes.
pub fn run(config: Config) -> anyhow::Result<()> {
    info!(view = ?config.view_mode, theme = ?config.theme, "starting dashboard");
    iced::application(
        move || {
            let mut app = PartsDashApp::new(config.clone());
            let fetches = fetch_images(&mut app.state);
            (app, fetches)
        },
        PartsDashApp::update,
        PartsDashApp::view,
    )
    .title(PartsDashApp::title)
    .theme(PartsDashApp::theme)
    .run()?;
    Ok(())
}

fn notify(toasts: &mut Toasts, duration: Duration, toast: Toast) -> Task<Message> {
    let id = toasts.push(toast);
    Task::perform(tokio::time::sleep(duration), move |_| Message::DismissToast(id))
}

/// Starts a download for every remote part image not seen yet.
fn fetch_images(state: &mut AppState) -> Task<Message> {
    let urls: Vec<String> = state
        .inventory
        .get_parts()
        .iter()
        .filter_map(|part| part.image_url.clone())
        .filter(|url| state.images.request(url))
        .collect();
    Task::batch(urls.into_iter().map(|url| {
        debug!(%url, "fetching part image");
        Task::perform(images::fetch(url.clone()), move |result| {
            Message::ImageFetched(url.clone(), result)
        })
    }))
}

impl PartsDashApp {
    pub fn new(config: Config) -> Self {
        let state = AppState::new(config);
        let screen = ScreenData::for_page(Page::Inventory, &state);
        Self {
            state,
            screen,
            toasts: Toasts::default(),
        }
    }

    fn title(&self) -> String {
        "Tapacubos Motorsport Parts Dashboard".to_string()
    }

    fn theme(&self) -> Theme {
        match self.state.config.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let toast_duration = self.state.config.toast_duration;
        match (&mut self.screen, message) {
            (screen, Message::Navigate(page)) => {
                if screen.page() != page {
                    debug!(?page, "navigating");
                    *screen = ScreenData::for_page(page, &self.state);
                }
                Task::none()
            }
            (_, Message::DismissToast(id)) => {
                self.toasts.dismiss(id);
                Task::none()
            }
            (_, Message::ImageFetched(url, result)) => {
                if let Err(error) = &result {
                    warn!(%url, %error, "could not load part image");
                }
                self.state.images.finish(url, result);
                Task::none()
            }
            (ScreenData::Inventory(page), Message::Inventory(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => {
                    page.update(msg, &self.state).map(Message::Inventory)
                }
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    InventoryParentMessage::AddPart(part) => {
                        let added = self.state.inventory.add_part(part);
                        info!(id = %added.id, name = %added.name, "part added");
                        Task::batch([
                            notify(&mut self.toasts, toast_duration, Toast::success("Part added successfully!")),
                            fetch_images(&mut self.state),
                        ])
                    }
                    InventoryParentMessage::DeletePart(pending) => {
                        match self.state.inventory.delete_part(pending) {
                            Some(removed) => {
                                info!(id = %removed.id, name = %removed.name, "part deleted");
                                page.sync_category(&self.state);
                                notify(
                                    &mut self.toasts,
                                    toast_duration,
                                    Toast::success("Part deleted successfully"),
                                )
                            }
                            None => Task::none(),
                        }
                    }
                    InventoryParentMessage::Notify(toast) => {
                        notify(&mut self.toasts, toast_duration, toast)
                    }
                    InventoryParentMessage::Navigate(page) => Task::done(Message::Navigate(page)),
                },
            },
            (ScreenData::Projects(page), Message::Projects(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => {
                    page.update(msg, &self.state).map(Message::Projects)
                }
                ScreenMessage::ParentMessage(ProjectsParentMessage::Navigate(page)) => {
                    Task::done(Message::Navigate(page))
                }
            },
            // Late messages for a screen that is no longer shown.
            _ => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let screen = match &self.screen {
            ScreenData::Inventory(page) => page.view(&self.state).map(Message::Inventory),
            ScreenData::Projects(page) => page.view(&self.state).map(Message::Projects),
        };
        stack![screen, self.toasts.view()].into()
    }
}
