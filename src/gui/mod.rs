mod app;
mod images;
mod message;
mod screens;
mod state;
mod toast;
mod widgets;

pub use app::{PartsDashApp, run};
pub use message::Message;
pub use state::AppState;
