use ratatui::style::{Color, Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Return the style for the selected list item.
///
pub fn active_list_item_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Return the style for error text.
///
pub fn error_text_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Return the style for muted hint text.
///
pub fn hint_text_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
