use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, editing: bool, palette: &Palette) {
    let hints: &[(&str, &str)] = if editing {
        &[
            ("[0-9 :]", " type HH:MM  "),
            ("[Enter]", " save  "),
            ("[Esc]", " cancel"),
        ]
    } else {
        &[
            ("[↑↓]", " select  "),
            ("[e]", " set time  "),
            ("[c]", " clear  "),
            ("[a]", " alarm  "),
            ("[t]", " theme  "),
            ("[?]", " help  "),
            ("[q]", " quit"),
        ]
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, palette.accent()));
        spans.push(Span::styled(*label, palette.dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(palette.base());
    frame.render_widget(paragraph, area);
}
