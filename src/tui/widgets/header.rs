use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::timings::{CITY, COUNTRY};
use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, current_time: &str, palette: &Palette) {
    let title_line = Line::from(vec![
        Span::styled("Namaz Reminder", palette.accent().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  ·  {}, {}", CITY, COUNTRY), palette.dim()),
    ]);

    let time_line = Line::from(vec![
        Span::styled("Current Time: ", palette.dim()),
        Span::styled(current_time, palette.bold()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.accent().add_modifier(Modifier::BOLD))
        .style(palette.base());

    let paragraph = Paragraph::new(vec![title_line, Line::from(""), time_line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
