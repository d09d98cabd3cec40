use super::Frame;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const QUESTION: &str = "Czy na pewno chcesz usunąć tego konia?";

/// Render the delete confirmation modal. While it is open, no request has
/// been sent yet; declining sends nothing.
///
pub fn confirm(frame: &mut Frame, size: Rect) {
    let width = (QUESTION.chars().count() as u16 + 6).min(size.width);
    let height = 5.min(size.height);
    let area = Rect::new(
        size.x + (size.width.saturating_sub(width)) / 2,
        size.y + (size.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Usuwanie")
        .border_style(styling::active_block_border_style());

    let text = vec![
        Line::from(Span::styled(QUESTION, styling::normal_text_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Usuń", styling::error_text_style()),
            Span::styled("   [n] Anuluj", styling::normal_text_style()),
        ]),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(text).block(block).alignment(Alignment::Center),
        area,
    );
}
