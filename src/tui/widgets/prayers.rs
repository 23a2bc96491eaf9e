use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{PrayerName, PrayerSchedule};
use crate::tui::theme::Palette;

/// `editing` carries the input buffer when the selected row is being edited.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    schedule: &PrayerSchedule,
    selected: usize,
    editing: Option<&str>,
    palette: &Palette,
) {
    let block = Block::default()
        .title(Span::styled(" Prayer Times ", palette.accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if editing.is_some() {
            palette.amber()
        } else {
            palette.border()
        })
        .style(palette.surface());

    let items: Vec<ListItem> = PrayerName::ALL
        .iter()
        .enumerate()
        .map(|(i, prayer)| {
            let is_selected = i == selected;

            let marker = if is_selected { "›" } else { " " };
            let name_style = if is_selected {
                palette.accent().add_modifier(Modifier::BOLD)
            } else {
                palette.bold()
            };

            let target = match (is_selected, editing) {
                (true, Some(buffer)) => Span::styled(
                    format!("{:<6}", format!("{}█", buffer)),
                    palette.amber().add_modifier(Modifier::BOLD),
                ),
                _ => match schedule.target(*prayer) {
                    Some(t) => Span::styled(format!("{:<6}", t.to_string()), palette.green()),
                    None => Span::styled(format!("{:<6}", "--:--"), palette.dim()),
                },
            };

            let reference = schedule.reference_display(*prayer);
            let reference_style = if schedule.reference(*prayer).is_some() {
                palette.bold()
            } else {
                palette.dim()
            };

            let line = Line::from(vec![
                Span::styled(format!(" {} ", marker), palette.accent()),
                Span::styled(format!("{:<9}", prayer.as_str()), name_style),
                target,
                Span::styled("   Actual Time: ", palette.dim()),
                Span::styled(reference, reference_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
