use iced::{
    Alignment::Center,
    Color, Element, Length, Theme, border,
    widget::{
        button, center, column, container, container::Style, image, mouse_area, opaque, row,
        stack, text,
    },
};
use iced_widget::container::bordered_box;

use crate::{
    config::ViewMode,
    core::inventory::{Condition, Part},
    gui::images::{ImageCache, ImageSource, RemoteImage},
};

/// Top-level pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Inventory,
    Projects,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Inventory => "Inventory",
            Page::Projects => "Projects",
        }
    }

    fn style(self, current: Self) -> impl Fn(&Theme, button::Status) -> button::Style {
        move |theme: &Theme, status| {
            if self == current {
                button::primary(theme, status)
            } else {
                button::text(theme, status)
            }
        }
    }
}

/// Page chrome: navigation, title block, optional header actions, body.
pub fn layout<'a, Message>(
    current: Page,
    on_navigate: impl Fn(Page) -> Message,
    title: impl Into<String>,
    subtitle: impl Into<String>,
    actions: Option<Element<'a, Message>>,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let nav = row(
        [Page::Inventory, Page::Projects]
            .into_iter()
            .map(|page| {
                button(text(page.label()))
                    .style(page.style(current))
                    .on_press(on_navigate(page))
                    .into()
            }),
    )
    .spacing(8);

    let mut header = row![
        container(column![
            text(title.into()).size(22),
            text(subtitle.into()).size(14).style(text::secondary),
        ])
        .width(Length::Fill),
    ]
    .align_y(Center)
    .spacing(16);
    if let Some(actions) = actions {
        header = header.push(actions);
    }

    column![
        container(column![nav, header].spacing(12))
            .padding(16)
            .width(Length::Fill)
            .style(bordered_box),
        container(body.into())
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .into()
}

pub fn badge<'a, Message: 'a>(label: impl Into<String>) -> Element<'a, Message> {
    container(text(label.into()).size(12))
        .padding([2, 8])
        .style(|theme: &Theme| {
            bordered_box(theme).border(border::rounded(8).color(theme.palette().primary).width(1))
        })
        .into()
}

fn condition_badge<'a, Message: 'a>(part: &Part) -> Element<'a, Message> {
    let label = part.condition.to_string();
    let highlighted = part.condition == Condition::New;
    container(text(label).size(12))
        .padding([2, 8])
        .style(move |theme: &Theme| {
            let palette = theme.palette();
            let style = Style::default().border(border::rounded(8));
            if highlighted {
                style.background(palette.primary).color(palette.background)
            } else {
                style.background(palette.text.scale_alpha(0.15))
            }
        })
        .into()
}

fn placeholder<'a, Message: 'a>(label: &'a str) -> Element<'a, Message> {
    text(label).size(12).style(text::secondary).into()
}

/// Local files load straight from disk; remote ones come from `images` once fetched.
pub fn part_image<'a, Message: 'a>(
    image_url: Option<&str>,
    images: &ImageCache,
    size: f32,
) -> Element<'a, Message> {
    let handle = match image_url.map(ImageSource::parse) {
        None => None,
        Some(ImageSource::Local(path)) => Some(image::Handle::from_path(path)),
        Some(ImageSource::Remote(url)) => match images.get(&url) {
            Some(RemoteImage::Loaded(handle)) => Some(handle.clone()),
            Some(RemoteImage::Loading) => return framed(placeholder("Loading image..."), size),
            Some(RemoteImage::Failed) | None => return framed(placeholder("Image unavailable"), size),
        },
    };
    let content: Element<'a, Message> = match handle {
        Some(handle) => image(handle)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        None => placeholder("No image"),
    };
    framed(content, size)
}

fn framed<'a, Message: 'a>(content: Element<'a, Message>, size: f32) -> Element<'a, Message> {
    center(content)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(|theme: &Theme| {
            Style::default()
                .background(theme.palette().text.scale_alpha(0.08))
                .border(border::rounded(6))
        })
        .into()
}

/// Renders one part according to `mode`. `on_delete` opens the confirmation.
pub fn part_card<'a, Message>(
    part: &'a Part,
    images: &ImageCache,
    mode: ViewMode,
    on_delete: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let sku: Element<'a, Message> = match &part.sku {
        Some(sku) => text(format!("SKU: {sku}")).size(13).style(text::secondary).into(),
        None => column![].into(),
    };
    let delete = button(text("Delete Part").size(13))
        .style(button::danger)
        .on_press(on_delete);
    let tags = row![badge(part.category.as_str()), condition_badge(part)].spacing(6);

    match mode {
        ViewMode::Grid => container(
            column![
                stack![
                    part_image(part.image_url.as_deref(), images, 200.0),
                    container(badge(format!("Qty: {}", part.quantity)))
                        .width(Length::Fixed(200.0))
                        .align_right(Length::Fixed(200.0))
                        .padding(6),
                ],
                text(part.name.as_str()).size(18),
                sku,
                text(part.location.as_str()).size(14),
                text(part.vehicle()).size(13).style(text::secondary),
                tags,
                delete.width(Length::Fill),
            ]
            .spacing(6),
        )
        .padding(12)
        .width(Length::Fixed(224.0))
        .style(bordered_box)
        .into(),
        ViewMode::List => container(
            row![
                part_image(part.image_url.as_deref(), images, 48.0),
                container(column![
                    text(part.name.as_str()).size(16),
                    text(part.vehicle()).size(13).style(text::secondary),
                ])
                .width(Length::FillPortion(3)),
                container(sku).width(Length::FillPortion(2)),
                container(text(part.location.as_str()).size(13)).width(Length::FillPortion(2)),
                tags,
                badge(format!("Qty: {}", part.quantity)),
                delete,
            ]
            .spacing(12)
            .align_y(Center),
        )
        .padding(8)
        .width(Length::Fill)
        .style(bordered_box)
        .into(),
        ViewMode::Feed => container(
            row![
                part_image(part.image_url.as_deref(), images, 160.0),
                column![
                    row![
                        container(text(part.name.as_str()).size(20)).width(Length::Fill),
                        badge(format!("Qty: {}", part.quantity)),
                    ]
                    .align_y(Center),
                    sku,
                    text(part.location.as_str()).size(15),
                    text(part.vehicle()).size(14).style(text::secondary),
                    tags,
                    delete,
                ]
                .spacing(8)
                .width(Length::Fill),
            ]
            .spacing(16),
        )
        .padding(12)
        .width(Length::Fill)
        .style(bordered_box)
        .into(),
    }
}

pub fn empty_state<'a, Message: 'a>(title: &'a str, hint: &'a str) -> Element<'a, Message> {
    center(
        column![text(title).size(20), text(hint).style(text::secondary)]
            .spacing(8)
            .align_x(Center),
    )
    .padding(48)
    .into()
}

/// Shows `content` over a dimmed `base`. Clicking outside sends `on_blur`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                Style::default().background(Color {
                    a: 0.8,
                    ..Color::BLACK
                })
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
