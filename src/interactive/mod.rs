//! Interactive TUI for stepping through a propagation run

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
