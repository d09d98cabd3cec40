use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const MESSAGE: &str = "Wczytywanie...";

/// Render the blocking busy overlay shown while a request is in flight.
/// Purely presentational; it never gates request execution.
///
pub fn loader(frame: &mut Frame, size: Rect, state: &State) {
    let width = (MESSAGE.chars().count() as u16 + 8).min(size.width);
    let height = 3.min(size.height);
    let area = Rect::new(
        size.x + (size.width.saturating_sub(width)) / 2,
        size.y + (size.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let line = Line::from(vec![
        Span::styled(spinner::frame(state), styling::active_list_item_style()),
        Span::styled(format!(" {}", MESSAGE), styling::normal_text_style()),
    ]);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styling::active_block_border_style()),
            ),
        area,
    );
}
