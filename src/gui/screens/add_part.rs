use std::{fmt, path::PathBuf};

use iced::{
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, text, text_input},
};
use iced_widget::container::bordered_box;
use rfd::AsyncFileDialog;

use crate::core::inventory::{
    CATEGORY_SUGGESTIONS, Condition, MAKE_SUGGESTIONS, NewPart, PartDraft, Project, ProjectId,
    ValidationError,
};

/// Project pick list entry. `Unassigned` clears the allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectChoice {
    Unassigned,
    Project(ProjectId, String),
}

impl fmt::Display for ProjectChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectChoice::Unassigned => f.write_str("No project"),
            ProjectChoice::Project(_, name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FormMessage {
    Name(String),
    Sku(String),
    Location(String),
    Quantity(String),
    Condition(Condition),
    Category(String),
    Make(String),
    Model(String),
    ImageUrl(String),
    Project(ProjectChoice),
    BrowseImage,
    ImagePicked(Option<PathBuf>),
    Submit,
    Cancel,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddPartForm {
    draft: PartDraft,
}

impl AddPartForm {
    /// Validates the form. On success the fields go back to their defaults.
    pub fn submit(&mut self) -> Result<NewPart, ValidationError> {
        let part = self.draft.validate()?;
        self.draft = PartDraft::default();
        Ok(part)
    }

    /// Field edits and the image picker. `Submit`/`Cancel` belong to the caller.
    pub fn update(&mut self, message: FormMessage) -> Task<FormMessage> {
        let draft = &mut self.draft;
        match message {
            FormMessage::Name(value) => draft.name = value,
            FormMessage::Sku(value) => draft.sku = value,
            FormMessage::Location(value) => draft.location = value,
            FormMessage::Quantity(value) => draft.quantity = value,
            FormMessage::Condition(value) => draft.condition = value,
            FormMessage::Category(value) => draft.category = value,
            FormMessage::Make(value) => draft.make = value,
            FormMessage::Model(value) => draft.model = value,
            FormMessage::ImageUrl(value) => draft.image_url = value,
            FormMessage::Project(ProjectChoice::Unassigned) => draft.project_id = None,
            FormMessage::Project(ProjectChoice::Project(id, _)) => draft.project_id = Some(id),
            FormMessage::BrowseImage => {
                return Task::perform(
                    AsyncFileDialog::new()
                        .set_title("Choose Part Image")
                        .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                        .pick_file(),
                    |handle| FormMessage::ImagePicked(handle.map(|file| file.path().to_path_buf())),
                );
            }
            FormMessage::ImagePicked(Some(path)) => {
                draft.image_url = format!("file://{}", path.display());
            }
            FormMessage::ImagePicked(None) | FormMessage::Submit | FormMessage::Cancel => {}
        }
        Task::none()
    }

    pub fn view<'a>(&'a self, projects: &'a [Project]) -> Element<'a, FormMessage> {
        let draft = &self.draft;

        let mut project_choices = vec![ProjectChoice::Unassigned];
        project_choices.extend(
            projects
                .iter()
                .map(|project| ProjectChoice::Project(project.id.clone(), project.name.clone())),
        );
        let selected_project = match &draft.project_id {
            None => ProjectChoice::Unassigned,
            Some(id) => project_choices
                .iter()
                .find(|choice| matches!(choice, ProjectChoice::Project(pid, _) if pid == id))
                .cloned()
                .unwrap_or(ProjectChoice::Unassigned),
        };
        let selected_category = CATEGORY_SUGGESTIONS
            .iter()
            .copied()
            .find(|category| *category == draft.category);
        let selected_make = MAKE_SUGGESTIONS
            .iter()
            .copied()
            .find(|make| *make == draft.make);

        let field = |label: &'a str, input: Element<'a, FormMessage>| -> Element<'a, FormMessage> {
            column![text(label).size(14), input].spacing(4).into()
        };

        let form = column![
            text("Add New Part").size(22),
            field(
                "Part Image",
                row![
                    text_input("Image URL or file path (optional)", &draft.image_url)
                        .on_input(FormMessage::ImageUrl),
                    button("Browse…").on_press(FormMessage::BrowseImage),
                ]
                .spacing(8)
                .into(),
            ),
            field(
                "Part Name *",
                text_input("e.g., Front Brake Pad Set", &draft.name)
                    .on_input(FormMessage::Name)
                    .into(),
            ),
            field(
                "SKU / Part Number *",
                text_input("e.g., BP-F-001", &draft.sku)
                    .on_input(FormMessage::Sku)
                    .into(),
            ),
            field(
                "Category *",
                pick_list(CATEGORY_SUGGESTIONS, selected_category, |category: &'static str| {
                    FormMessage::Category(category.to_string())
                })
                .placeholder("Select category")
                .width(Length::Fill)
                .into(),
            ),
            row![
                field(
                    "Brand *",
                    pick_list(MAKE_SUGGESTIONS, selected_make, |make: &'static str| {
                        FormMessage::Make(make.to_string())
                    })
                    .placeholder("Select make")
                    .width(Length::Fill)
                    .into(),
                ),
                field(
                    "Model *",
                    text_input("e.g., Camry, Civic", &draft.model)
                        .on_input(FormMessage::Model)
                        .into(),
                ),
            ]
            .spacing(12),
            field(
                "Warehouse Location *",
                text_input("e.g., Aisle 3, Shelf B2", &draft.location)
                    .on_input(FormMessage::Location)
                    .into(),
            ),
            row![
                field(
                    "Quantity",
                    text_input("1", &draft.quantity)
                        .on_input(FormMessage::Quantity)
                        .into(),
                ),
                field(
                    "Condition",
                    pick_list(Condition::ALL, Some(draft.condition), FormMessage::Condition)
                        .width(Length::Fill)
                        .into(),
                ),
            ]
            .spacing(12),
            field(
                "Project",
                pick_list(project_choices, Some(selected_project), FormMessage::Project)
                    .width(Length::Fill)
                    .into(),
            ),
            row![
                button("Cancel")
                    .style(button::secondary)
                    .width(Length::Fill)
                    .on_press(FormMessage::Cancel),
                button("Add Part")
                    .width(Length::Fill)
                    .on_press(FormMessage::Submit),
            ]
            .spacing(12),
        ]
        .spacing(12);

        container(form)
            .padding(20)
            .width(Length::Fixed(500.0))
            .style(bordered_box)
            .into()
    }
}
