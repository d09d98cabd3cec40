use super::Frame;
use crate::state::State;
use ratatui::layout::Rect;

/// Render the horse creation form. The form starts from a fresh record and
/// never issues an initial request.
///
pub fn create_horse(frame: &mut Frame, size: Rect, state: &State) {
    if let Some(form) = state.form() {
        super::form::form(frame, size, "Dodaj nowego konia", form);
    }
}
