//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library,
//! including:
//! - Screen rendering (list, create form, edit form)
//! - Overlays (busy indicator, toast notification, delete confirmation)
//! - Reusable widget components (spinner, styling)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
