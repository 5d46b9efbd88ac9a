use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Row, button, column, container, row, scrollable, text, text_input},
};
use iced_widget::container::bordered_box;
use tracing::warn;

use crate::{
    config::ViewMode,
    core::inventory::{
        CategoryFilter, NewPart, PartFilter, PartId, PartRepository, PendingDeletion,
        ProjectRepository,
    },
    gui::{
        AppState,
        screens::{
            Screen, ScreenMessage,
            add_part::{AddPartForm, FormMessage},
        },
        toast::Toast,
        widgets::{Page, empty_state, layout, modal, part_card},
    },
};

#[derive(Debug, Clone)]
pub struct InventoryScreen {
    filter: PartFilter,
    view_mode: ViewMode,
    add_form: AddPartForm,
    add_dialog_open: bool,
    pending_delete: Option<PendingDeletion>,
}

#[derive(Debug, Clone)]
pub enum InventoryMessage {
    Search(String),
    SelectCategory(String),
    SetViewMode(ViewMode),
    OpenAddDialog,
    Form(FormMessage),
    RequestDelete(PartId),
    CancelDelete,
    ConfirmDelete,
    Navigate(Page),
}

#[derive(Debug, Clone)]
pub enum InventoryParentMessage {
    AddPart(NewPart),
    DeletePart(PendingDeletion),
    Notify(Toast),
    Navigate(Page),
}

/// Outcome of one screen update, turned into a `Task` by [`Screen::update`].
enum Effect {
    None,
    Parent(InventoryParentMessage),
    Form(Task<FormMessage>),
}

impl InventoryScreen {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            filter: PartFilter::default(),
            view_mode,
            add_form: AddPartForm::default(),
            add_dialog_open: false,
            pending_delete: None,
        }
    }

    /// Falls back to "all" when the selected category no longer has parts.
    pub fn sync_category(&mut self, state: &AppState) {
        let selected = self.filter.category().as_tab().to_string();
        if !state.inventory.categories().contains(&selected) {
            self.filter.set_category(CategoryFilter::All);
        }
    }

    fn apply(&mut self, message: InventoryMessage, state: &AppState) -> Effect {
        match message {
            InventoryMessage::Search(query) => self.filter.set_query(query),
            InventoryMessage::SelectCategory(category) => self.filter.set_category(category),
            InventoryMessage::SetViewMode(mode) => self.view_mode = mode,
            InventoryMessage::OpenAddDialog => self.add_dialog_open = true,
            InventoryMessage::Form(FormMessage::Submit) => {
                return match self.add_form.submit() {
                    Ok(part) => {
                        self.add_dialog_open = false;
                        Effect::Parent(InventoryParentMessage::AddPart(part))
                    }
                    Err(error) => {
                        warn!(%error, "rejected part draft");
                        Effect::Parent(InventoryParentMessage::Notify(Toast::error(error.to_string())))
                    }
                };
            }
            InventoryMessage::Form(FormMessage::Cancel) => self.add_dialog_open = false,
            InventoryMessage::Form(msg) => return Effect::Form(self.add_form.update(msg)),
            InventoryMessage::RequestDelete(id) => {
                self.pending_delete = state.inventory.request_delete(&id);
            }
            InventoryMessage::CancelDelete => self.pending_delete = None,
            InventoryMessage::ConfirmDelete => {
                if let Some(pending) = self.pending_delete.take() {
                    return Effect::Parent(InventoryParentMessage::DeletePart(pending));
                }
            }
            InventoryMessage::Navigate(page) => {
                return Effect::Parent(InventoryParentMessage::Navigate(page));
            }
        }
        Effect::None
    }

    fn confirm_dialog(pending: &PendingDeletion) -> Element<'_, InventoryMessage> {
        container(
            column![
                text("Are you sure?").size(20),
                text(format!(
                    "This will permanently delete \"{}\" from your inventory. This action cannot be undone.",
                    pending.name
                )),
                row![
                    button("Cancel")
                        .style(button::secondary)
                        .on_press(InventoryMessage::CancelDelete),
                    button("Delete")
                        .style(button::danger)
                        .on_press(InventoryMessage::ConfirmDelete),
                ]
                .spacing(12),
            ]
            .spacing(16),
        )
        .padding(20)
        .width(Length::Fixed(420.0))
        .style(bordered_box)
        .into()
    }

    fn results<'a>(&'a self, state: &'a AppState) -> Element<'a, InventoryMessage> {
        let parts = state.inventory.filter(&self.filter);
        if parts.is_empty() {
            let hint = if self.filter.is_search_active() {
                "Try adjusting your search"
            } else {
                "Add your first part to get started"
            };
            return empty_state("No parts found", hint);
        }

        let cards = parts.into_iter().map(|part| {
            part_card(
                part,
                &state.images,
                self.view_mode,
                InventoryMessage::RequestDelete(part.id.clone()),
            )
        });
        let content: Element<'a, InventoryMessage> = match self.view_mode {
            ViewMode::Grid => Row::with_children(cards).spacing(16).wrap().into(),
            ViewMode::List => column(cards).spacing(6).into(),
            ViewMode::Feed => column(cards).spacing(16).into(),
        };
        scrollable(content).height(Length::Fill).into()
    }
}

fn tab_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Screen for InventoryScreen {
    type Message = InventoryMessage;
    type ParentMessage = InventoryParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let selected_tab = self.filter.category().as_tab();
        let tabs = row(state.inventory.categories().into_iter().map(|category| {
            let style = if category == selected_tab {
                button::primary
            } else {
                button::secondary
            };
            button(text(tab_label(&category)))
                .style(style)
                .on_press(InventoryMessage::SelectCategory(category))
                .into()
        }))
        .spacing(4);

        let modes = row(ViewMode::ALL.into_iter().map(|mode| {
            button(text(mode.label()))
                .style(if mode == self.view_mode {
                    button::primary
                } else {
                    button::text
                })
                .on_press(InventoryMessage::SetViewMode(mode))
                .into()
        }))
        .spacing(4);

        let body = column![
            container(
                text_input(
                    "Search by name, SKU, location, category, make, or model...",
                    self.filter.query(),
                )
                .on_input(InventoryMessage::Search)
                .padding(10),
            )
            .max_width(640.0),
            row![container(tabs).width(Length::Fill), modes].align_y(Center),
            self.results(state),
        ]
        .spacing(16);

        let page = layout(
            Page::Inventory,
            InventoryMessage::Navigate,
            "Tapacubos Motorsport Parts Dashboard",
            format!("{} parts in stock", state.inventory.len()),
            Some(
                button(text("+ Add Part").size(16))
                    .padding([10, 18])
                    .on_press(InventoryMessage::OpenAddDialog)
                    .into(),
            ),
            body,
        );

        let page = if let Some(pending) = &self.pending_delete {
            modal(page, Self::confirm_dialog(pending), InventoryMessage::CancelDelete)
        } else if self.add_dialog_open {
            modal(
                page,
                self.add_form
                    .view(state.inventory.get_projects())
                    .map(InventoryMessage::Form),
                InventoryMessage::Form(FormMessage::Cancel),
            )
        } else {
            page
        };
        page.map(ScreenMessage::ScreenMessage)
    }

    fn update(&mut self, message: Self::Message, state: &AppState) -> Task<ScreenMessage<Self>> {
        match self.apply(message, state) {
            Effect::None => Task::none(),
            Effect::Parent(message) => Task::done(ScreenMessage::ParentMessage(message)),
            Effect::Form(task) => {
                task.map(|msg| ScreenMessage::ScreenMessage(InventoryMessage::Form(msg)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, gui::toast::ToastKind};

    fn screen() -> (InventoryScreen, AppState) {
        (InventoryScreen::new(ViewMode::Grid), AppState::new(Config::default()))
    }

    fn fill_form(screen: &mut InventoryScreen, state: &AppState) {
        for field in [
            FormMessage::Name("Rear Shock Absorber".to_string()),
            FormMessage::Sku("RS-220".to_string()),
            FormMessage::Location("Aisle 4, Shelf D3".to_string()),
            FormMessage::Category("Suspension".to_string()),
            FormMessage::Make("Subaru".to_string()),
            FormMessage::Model("WRX".to_string()),
        ] {
            assert!(matches!(screen.apply(InventoryMessage::Form(field), state), Effect::Form(_)));
        }
    }

    #[test]
    fn test_submit_resets_form_and_closes_dialog() {
        let (mut screen, state) = screen();
        screen.apply(InventoryMessage::OpenAddDialog, &state);
        fill_form(&mut screen, &state);

        let effect = screen.apply(InventoryMessage::Form(FormMessage::Submit), &state);

        match effect {
            Effect::Parent(InventoryParentMessage::AddPart(part)) => {
                assert_eq!(part.name, "Rear Shock Absorber");
                assert_eq!(part.quantity, 1);
            }
            _ => panic!("submit should ask the app to add the part"),
        }
        assert!(!screen.add_dialog_open);
        assert_eq!(screen.add_form, AddPartForm::default());
    }

    #[test]
    fn test_rejected_submit_keeps_dialog_open() {
        let (mut screen, state) = screen();
        screen.apply(InventoryMessage::OpenAddDialog, &state);
        screen.apply(InventoryMessage::Form(FormMessage::Name("Half done".to_string())), &state);

        let effect = screen.apply(InventoryMessage::Form(FormMessage::Submit), &state);

        match effect {
            Effect::Parent(InventoryParentMessage::Notify(toast)) => {
                assert_eq!(toast.kind, ToastKind::Error);
                assert_eq!(toast.text, "Please fill in all required fields");
            }
            _ => panic!("a rejected submit should raise an error toast"),
        }
        assert!(screen.add_dialog_open);
        assert_eq!(state.inventory.len(), 3);
        // what was typed survives the failed attempt
        assert_ne!(screen.add_form, AddPartForm::default());
    }

    #[test]
    fn test_cancelled_form_keeps_draft() {
        let (mut screen, state) = screen();
        screen.apply(InventoryMessage::OpenAddDialog, &state);
        fill_form(&mut screen, &state);

        assert!(matches!(
            screen.apply(InventoryMessage::Form(FormMessage::Cancel), &state),
            Effect::None
        ));
        assert!(!screen.add_dialog_open);
        assert_ne!(screen.add_form, AddPartForm::default());
    }

    #[test]
    fn test_cancelled_delete_never_deletes() {
        let (mut screen, state) = screen();

        assert!(matches!(
            screen.apply(InventoryMessage::RequestDelete(PartId::new("1")), &state),
            Effect::None
        ));
        assert_eq!(
            screen.pending_delete.as_ref().map(|pending| pending.name.as_str()),
            Some("Front Brake Pad Set")
        );

        screen.apply(InventoryMessage::CancelDelete, &state);
        assert!(screen.pending_delete.is_none());
        assert!(matches!(screen.apply(InventoryMessage::ConfirmDelete, &state), Effect::None));
    }

    #[test]
    fn test_confirmed_delete_is_sent_once() {
        let (mut screen, state) = screen();
        screen.apply(InventoryMessage::RequestDelete(PartId::new("2")), &state);

        match screen.apply(InventoryMessage::ConfirmDelete, &state) {
            Effect::Parent(InventoryParentMessage::DeletePart(pending)) => {
                assert_eq!(pending.id, PartId::new("2"));
            }
            _ => panic!("confirming should ask the app to delete the part"),
        }
        assert!(matches!(screen.apply(InventoryMessage::ConfirmDelete, &state), Effect::None));
    }

    #[test]
    fn test_unknown_part_opens_no_confirmation() {
        let (mut screen, state) = screen();

        screen.apply(InventoryMessage::RequestDelete(PartId::new("missing")), &state);

        assert!(screen.pending_delete.is_none());
    }

    #[test]
    fn test_emptied_category_falls_back_to_all() {
        let (mut screen, mut state) = screen();
        screen.apply(InventoryMessage::SelectCategory("Brakes".to_string()), &state);
        screen.sync_category(&state);
        assert_eq!(screen.filter.category(), &CategoryFilter::Only("Brakes".to_string()));

        let pending = state
            .inventory
            .request_delete(&PartId::new("1"))
            .expect("seed part exists");
        state.inventory.delete_part(pending);
        screen.sync_category(&state);

        assert_eq!(screen.filter.category(), &CategoryFilter::All);
    }
}
