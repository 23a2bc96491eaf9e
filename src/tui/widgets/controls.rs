use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Palette;

pub fn alarm_label(alarm_enabled: bool) -> &'static str {
    if alarm_enabled { "Turn Alarm Off" } else { "Turn Alarm On" }
}

/// Names the mode the toggle switches to.
pub fn theme_label(dark_mode: bool) -> &'static str {
    if dark_mode { "Light Mode" } else { "Dark Mode" }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    alarm_enabled: bool,
    dark_mode: bool,
    palette: &Palette,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let alarm_style = if alarm_enabled {
        palette.green()
    } else {
        palette.red()
    };
    button(frame, halves[0], "a", alarm_label(alarm_enabled), alarm_style, palette);
    button(frame, halves[1], "t", theme_label(dark_mode), palette.accent(), palette);
}

fn button(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    label: &str,
    border: ratatui::style::Style,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(palette.surface());

    let line = Line::from(vec![
        Span::styled(format!("[{}] ", key), palette.accent()),
        Span::styled(label.to_string(), palette.bold().add_modifier(Modifier::BOLD)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, area);
}
