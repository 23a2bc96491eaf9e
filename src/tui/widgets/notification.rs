use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, message: &str, playing: bool, palette: &Palette) {
    let block = Block::default()
        .title(Span::styled(" Alarm ", palette.red().add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(palette.red())
        .style(palette.surface());

    let text = vec![
        Line::from(vec![
            Span::styled(if playing { "♪ " } else { "" }, palette.accent()),
            Span::styled(message, palette.amber().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("[Space]", palette.accent()),
            Span::styled(" Turn Off Alarm", palette.dim()),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
