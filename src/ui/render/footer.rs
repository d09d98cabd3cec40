use super::Frame;
use crate::state::{Route, State};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

/// Render the footer hint line for the current screen.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let hints = if state.get_delete_confirmation().is_some() {
        "y: usuń | n: anuluj"
    } else if state.is_debug_mode() {
        "Esc/D: zamknij dziennik"
    } else {
        match state.current_route() {
            Route::List => {
                "q: wyjdź | j/k: zaznacz | f: filtruj | r: odśwież | a: dodaj | e: edytuj | d: usuń | D: dziennik"
            }
            Route::Add | Route::Edit(_) => {
                "Tab: następne pole | Enter: zapisz | Esc: anuluj"
            }
        }
    };

    frame.render_widget(
        Paragraph::new(Span::styled(hints, styling::hint_text_style())),
        size,
    );
}
