use super::Frame;
use crate::state::{FormField, HorseForm};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the horse form shared by the create and edit screens.
///
pub fn form(frame: &mut Frame, size: Rect, title: &str, form: &HorseForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Breed
            Constraint::Length(3), // Age
            Constraint::Length(3), // Availability
            Constraint::Length(1), // Inline error
            Constraint::Min(0),    // Spacer
        ])
        .split(size);

    let title_widget = Paragraph::new(title)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style()),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title_widget, chunks[0]);

    render_text_field(
        frame,
        chunks[1],
        "Rasa",
        &form.breed,
        form.field == FormField::Breed,
    );
    render_text_field(
        frame,
        chunks[2],
        "Wiek",
        &form.age,
        form.field == FormField::Age,
    );
    render_availability_field(
        frame,
        chunks[3],
        form.available_for_riding,
        form.field == FormField::Available,
    );

    if let Some(error) = &form.error {
        let error_widget =
            Paragraph::new(Span::styled(error.clone(), styling::error_text_style()));
        frame.render_widget(error_widget, chunks[4]);
    }
}

fn render_text_field(frame: &mut Frame, size: Rect, label: &str, value: &str, is_selected: bool) {
    let border_style = if is_selected {
        styling::active_block_border_style()
    } else {
        styling::normal_block_border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(label)
        .border_style(border_style);

    let text_style = if is_selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        styling::normal_text_style()
    };

    let text = if is_selected {
        Line::from(vec![
            Span::styled(value.to_owned(), text_style),
            Span::styled("█", Style::default().fg(Color::Cyan)), // Cursor
        ])
    } else {
        Line::from(vec![Span::styled(value.to_owned(), text_style)])
    };

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, size);
}

fn render_availability_field(frame: &mut Frame, size: Rect, available: bool, is_selected: bool) {
    let border_style = if is_selected {
        styling::active_block_border_style()
    } else {
        styling::normal_block_border_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Dostępność")
        .border_style(border_style);

    let checkbox = if available { "[x]" } else { "[ ]" };
    let text = Line::from(vec![
        Span::styled(
            format!("{} Dostępny do jazdy", checkbox),
            styling::normal_text_style(),
        ),
        Span::styled(
            if is_selected {
                "  (spacja przełącza)"
            } else {
                ""
            },
            styling::hint_text_style(),
        ),
    ]);

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, size);
}
