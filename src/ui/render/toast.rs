use super::Frame;
use crate::state::{Toast, ToastKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the transient notification in the top-right corner. At most one
/// is visible; it auto-dismisses on the tick after its duration elapses.
///
pub fn toast(frame: &mut Frame, size: Rect, toast: &Toast) {
    let width = (toast.message.chars().count() as u16 + 4).min(size.width);
    let height = 3.min(size.height);
    let area = Rect::new(
        size.x + size.width.saturating_sub(width + 1),
        size.y + 1,
        width,
        height,
    );

    let background = match toast.kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };
    let style = Style::default().fg(Color::White).bg(background);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Span::styled(toast.message.clone(), style))
            .style(style)
            .block(Block::default().borders(Borders::ALL).style(style)),
        area,
    );
}
