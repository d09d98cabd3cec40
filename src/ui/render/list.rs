use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const BLOCK_TITLE: &str = "Lista koni";

/// Render the horse list screen according to state.
///
pub fn list(frame: &mut Frame, size: Rect, state: &mut State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(size);

    // Active filter header
    let filter_line = Line::from(vec![
        Span::styled("Filtruj: ", styling::hint_text_style()),
        Span::styled(state.get_filter().label(), styling::normal_text_style()),
    ]);
    let filter = Paragraph::new(filter_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style()),
    );
    frame.render_widget(filter, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(BLOCK_TITLE)
        .border_style(styling::active_block_border_style());

    if state.get_horses().is_empty() {
        let empty = Paragraph::new(Span::styled(
            "Brak koni do wyświetlenia",
            styling::hint_text_style(),
        ))
        .block(block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = state
        .get_horses()
        .iter()
        .map(|horse| {
            let availability = if horse.available_for_riding {
                "Tak"
            } else {
                "Nie"
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<24}", horse.breed),
                    styling::normal_text_style(),
                ),
                Span::styled(
                    format!("Wiek: {:>3}   ", horse.age),
                    styling::normal_text_style(),
                ),
                Span::styled(
                    format!("Dostępny: {}", availability),
                    styling::normal_text_style(),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style())
        .highlight_style(styling::active_list_item_style())
        .highlight_symbol("> ")
        .block(block);

    frame.render_stateful_widget(list, chunks[1], state.get_horses_list_state());
}
