use super::Frame;
use crate::state::{EditState, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the horse editing screen according to its state machine: a
/// loading placeholder, the bound form, or the not-found message. The form
/// is never rendered unless the horse was fetched.
///
pub fn edit_horse(frame: &mut Frame, size: Rect, state: &State) {
    match state.get_edit_state() {
        EditState::Loading => {
            let loading = Paragraph::new(Span::styled(
                "Ładowanie...",
                styling::hint_text_style(),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Edycja konia")
                    .border_style(styling::normal_block_border_style()),
            );
            frame.render_widget(loading, size);
        }
        EditState::Ready => {
            if let Some(form) = state.form() {
                super::form::form(frame, size, "Edycja konia", form);
            }
        }
        EditState::NotFound(message) => {
            let not_found = Paragraph::new(vec![
                Line::from(Span::styled(message.clone(), styling::error_text_style())),
                Line::from(Span::styled(
                    "Esc: powrót do listy",
                    styling::hint_text_style(),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Edycja konia")
                    .border_style(styling::normal_block_border_style()),
            );
            frame.render_widget(not_found, size);
        }
    }
}
