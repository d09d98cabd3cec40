use super::Frame;
use crate::state::{Route, State};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole frame according to state: the screen for the current
/// route, the footer, and any overlays on top.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    if state.is_debug_mode() {
        super::log::log(frame, chunks[0], state);
    } else {
        match *state.current_route() {
            Route::List => super::list::list(frame, chunks[0], state),
            Route::Add => super::create_horse::create_horse(frame, chunks[0], state),
            Route::Edit(_) => super::edit_horse::edit_horse(frame, chunks[0], state),
        }
    }

    super::footer::footer(frame, chunks[1], state);

    if state.get_delete_confirmation().is_some() {
        super::confirm::confirm(frame, size);
    }
    if state.is_busy() {
        super::loader::loader(frame, size, state);
    }
    if let Some(toast) = state.get_toast().cloned() {
        super::toast::toast(frame, size, &toast);
    }
}
