use iced::{
    Element, Length, Theme,
    alignment::{Horizontal, Vertical},
    border,
    widget::{column, container, container::Style, text},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

/// Transient notifications, dismissed by id once their timer fires.
#[derive(Debug, Default)]
pub struct Toasts {
    next_id: u64,
    active: Vec<(u64, Toast)>,
}

impl Toasts {
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push((id, toast));
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.active.retain(|(toast_id, _)| *toast_id != id);
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let stack = column(self.active.iter().map(|(_, toast)| {
            let kind = toast.kind;
            container(text(toast.text.as_str()))
                .padding([8, 16])
                .style(move |theme: &Theme| {
                    let palette = theme.extended_palette();
                    let pair = match kind {
                        ToastKind::Success => palette.success.base,
                        ToastKind::Error => palette.danger.base,
                    };
                    Style::default()
                        .background(pair.color)
                        .color(pair.text)
                        .border(border::rounded(6))
                })
                .into()
        }))
        .spacing(8);

        container(stack)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .into()
    }
}
