use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{Row, column, container, row, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::inventory::{Project, ProjectRepository},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{Page, badge, empty_state, layout, part_image},
    },
};

#[derive(Debug, Clone)]
pub struct ProjectsScreen;

#[derive(Debug, Clone)]
pub enum ProjectsMessage {
    Navigate(Page),
}

#[derive(Debug, Clone)]
pub enum ProjectsParentMessage {
    Navigate(Page),
}

fn project_card<'a>(project: &'a Project, state: &'a AppState) -> Element<'a, ProjectsMessage> {
    let stats = state.inventory.get_project_stats(&project.id);
    let parts = state.inventory.get_project_parts(&project.id);
    let noun = if stats.total_parts == 1 { "part" } else { "parts" };

    let mut heading = column![text(project.name.as_str()).size(22)];
    if let Some(description) = &project.description {
        heading = heading.push(text(description.as_str()).size(14).style(text::secondary));
    }

    let allocated: Element<'a, ProjectsMessage> = if parts.is_empty() {
        container(
            text("No parts allocated to this project yet")
                .size(14)
                .style(text::secondary),
        )
        .center_x(Length::Fill)
        .padding(24)
        .into()
    } else {
        column![
            text("Allocated Parts:").size(14),
            scrollable(
                column(parts.into_iter().map(|part| {
                    let mut right = column![badge(format!("Qty: {}", part.quantity))].align_x(Center);
                    if let Some(sku) = &part.sku {
                        right = right.push(text(sku.as_str()).size(12).style(text::secondary));
                    }
                    container(
                        row![
                            part_image(part.image_url.as_deref(), &state.images, 48.0),
                            container(column![
                                text(part.name.as_str()).size(14),
                                text(part.vehicle()).size(12).style(text::secondary),
                            ])
                            .width(Length::Fill),
                            right,
                        ]
                        .spacing(12)
                        .align_y(Center),
                    )
                    .padding(8)
                    .style(bordered_box)
                    .into()
                }))
                .spacing(6),
            )
            .height(Length::Shrink),
        ]
        .spacing(8)
        .into()
    };

    container(
        column![
            row![
                container(heading).width(Length::Fill),
                badge(format!("{} {noun}", stats.total_parts)),
            ],
            row![
                text(format!("Total Parts: {}", stats.total_parts)).size(14),
                text(format!("Total Quantity: {}", stats.total_quantity)).size(14),
            ]
            .spacing(16),
            allocated,
        ]
        .spacing(12),
    )
    .padding(16)
    .width(Length::Fixed(460.0))
    .style(bordered_box)
    .into()
}

impl Screen for ProjectsScreen {
    type Message = ProjectsMessage;
    type ParentMessage = ProjectsParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let projects = state.inventory.get_projects();
        let body: Element<'a, ProjectsMessage> = if projects.is_empty() {
            empty_state(
                "No projects yet",
                "Create your first project to start organizing parts",
            )
        } else {
            scrollable(
                Row::with_children(projects.iter().map(|project| project_card(project, state)))
                    .spacing(24)
                    .wrap(),
            )
            .height(Length::Fill)
            .into()
        };

        layout(
            Page::Projects,
            ProjectsMessage::Navigate,
            "Projects Overview",
            format!("{} active projects", projects.len()),
            None,
            body,
        )
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(&mut self, message: Self::Message, _state: &AppState) -> Task<ScreenMessage<Self>> {
        match message {
            ProjectsMessage::Navigate(page) => Task::done(ScreenMessage::ParentMessage(
                ProjectsParentMessage::Navigate(page),
            )),
        }
    }
}
