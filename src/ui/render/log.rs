use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the log view. Silent list-load failures surface here and nowhere
/// else.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let block = Block::default()
        .title("Dziennik")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style());

    let entries = state.get_log_entries();
    let visible = size.height.saturating_sub(2) as usize;
    let skip = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            ListItem::new(Line::from(vec![Span::styled(
                entry.clone(),
                styling::normal_text_style(),
            )]))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style())
        .block(block);

    frame.render_widget(list, size);
}
