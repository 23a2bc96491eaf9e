use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    DefaultTerminal, Frame,
};

use crate::alarm::{AlarmEngine, AlarmState, Player, ProcessPlayer};
use crate::config::AppConfig;
use crate::models::{PrayerName, PrayerSchedule, ReferenceTimes, TargetTime};
use crate::timings::{self, FetchError};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{controls, header, notification, prayers, statusbar};
use crate::utils::clock::{Clock, ClockReading, SystemClock};

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    EditTarget,
}

/// The reminder session: owns the schedule, the alarm engine (and through
/// it the playback handle), the clock and the UI toggles.
pub struct App {
    pub schedule: PrayerSchedule,
    pub alarm: AlarmEngine,
    pub dark_mode: bool,
    pub reading: ClockReading,
    /// Whether the azan was still audible at the last tick.
    pub playing: bool,
    pub selected: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub input_error: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
    clock: Box<dyn Clock>,
}

impl App {
    pub fn new(config: &AppConfig, player: Box<dyn Player>, clock: Box<dyn Clock>) -> Self {
        let reading = ClockReading::at(clock.now());
        App {
            schedule: PrayerSchedule::new(),
            alarm: AlarmEngine::new(player),
            dark_mode: config.ui.dark_mode,
            reading,
            playing: false,
            selected: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_error: None,
            show_help: false,
            should_quit: false,
            clock,
        }
    }

    pub fn selected_prayer(&self) -> PrayerName {
        PrayerName::ALL[self.selected]
    }

    pub fn alarm_state(&self) -> AlarmState {
        self.alarm.state()
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.tick(),
            Event::Timings(result) => self.apply_reference_times(result),
        }
    }

    pub fn tick(&mut self) {
        self.reading = ClockReading::at(self.clock.now());
        self.alarm.evaluate(&self.schedule, &self.reading.comparison);
        self.playing = self.alarm.is_playing();
    }

    pub fn apply_reference_times(&mut self, result: Result<ReferenceTimes, FetchError>) {
        match result {
            Ok(times) => {
                if self.schedule.merge_reference_times(&times) {
                    log::info!("Prayer times loaded");
                } else {
                    log::debug!("Ignoring late prayer times; already set");
                }
            }
            Err(e) => log::error!("Error fetching prayer times: {}", e),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        log::debug!("Dark mode {}", self.dark_mode);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle actual key presses — ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_mode {
            InputMode::EditTarget => self.handle_edit_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < PrayerName::ALL.len() - 1 {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                self.input_mode = InputMode::EditTarget;
                self.input_buffer = self
                    .schedule
                    .target(self.selected_prayer())
                    .map(|t| t.to_string())
                    .unwrap_or_default();
                self.input_error = None;
            }
            KeyCode::Delete | KeyCode::Char('c') => {
                self.schedule.clear_target(self.selected_prayer());
            }
            KeyCode::Char('a') => {
                self.alarm.toggle_enabled();
                self.playing = self.alarm.is_playing();
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
            }
            KeyCode::Char(' ') | KeyCode::Char('o') => {
                self.alarm.dismiss();
                self.playing = false;
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.input_error = None;
            }
            KeyCode::Enter => {
                let trimmed = self.input_buffer.trim().to_string();
                if trimmed.is_empty() {
                    self.schedule.clear_target(self.selected_prayer());
                    self.input_mode = InputMode::Normal;
                    self.input_error = None;
                    return;
                }
                match trimmed.parse::<TargetTime>() {
                    Ok(time) => {
                        let prayer = self.selected_prayer();
                        self.schedule.set_target(prayer, time);
                        log::info!("{} target set to {}", prayer, time);
                        self.input_mode = InputMode::Normal;
                        self.input_buffer.clear();
                        self.input_error = None;
                    }
                    Err(e) => {
                        self.input_error = Some(e.to_string());
                    }
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                self.input_error = None;
            }
            KeyCode::Char(c) if (c.is_ascii_digit() || c == ':') && self.input_buffer.len() < 5 => {
                self.input_buffer.push(c);
                self.input_error = None;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let palette = theme::palette(self.dark_mode);
        let area = frame.area();

        frame.render_widget(Block::default().style(palette.base()), area);

        let banner_height = if self.alarm.notification().is_some() { 4 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),             // header + clock
                Constraint::Length(banner_height), // notification
                Constraint::Length(7),             // prayers
                Constraint::Length(3),             // controls
                Constraint::Min(0),
                Constraint::Length(1),             // status bar
            ])
            .split(area);

        header::render(frame, chunks[0], &self.reading.display, palette);

        if let Some(message) = self.alarm.notification() {
            notification::render(frame, chunks[1], message, self.playing, palette);
        }

        let editing = self.input_mode == InputMode::EditTarget;
        prayers::render(
            frame,
            chunks[2],
            &self.schedule,
            self.selected,
            editing.then_some(self.input_buffer.as_str()),
            palette,
        );

        controls::render(frame, chunks[3], self.alarm.enabled(), self.dark_mode, palette);

        if let Some(err) = &self.input_error {
            let line = Line::from(Span::styled(format!("  ✗ {}", err), palette.red()));
            frame.render_widget(Paragraph::new(line), chunks[4]);
        }

        statusbar::render(frame, chunks[5], editing, palette);

        if self.show_help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let palette = theme::palette(self.dark_mode);
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 6,
            y: area.height / 6,
            width: area.width * 2 / 3,
            height: (area.height * 2 / 3).min(14),
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("[↑ ↓]        ", "Select prayer"),
            ("[e] / Enter  ", "Set target time (HH:MM)"),
            ("[c] / Del    ", "Clear target time"),
            ("[Space] / [o]", "Turn off ringing alarm"),
            ("[a]          ", "Turn alarms on / off"),
            ("[t]          ", "Switch light / dark mode"),
            ("[?]          ", "Toggle help"),
            ("[q] / Esc    ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                palette.accent().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, action) in bindings {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {}  ", key), palette.accent()),
                Span::styled(action, palette.dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Help ", palette.accent()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.accent())
            .style(palette.surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, presets: Vec<(PrayerName, TargetTime)>, fetch: bool) -> Result<()> {
    let sound_file = config.sound_file().context("Resolving alarm sound")?;
    let player = ProcessPlayer::new(&config.alarm, sound_file);
    let mut app = App::new(&config, Box::new(player), Box::new(SystemClock));
    for (prayer, time) in presets {
        app.schedule.set_target(prayer, time);
    }

    let events = EventHandler::new(config.ui.tick_rate_ms);
    if fetch {
        let tx = events.sender();
        timings::spawn_fetch(config.api.clone(), move |result| {
            let _ = tx.send(Event::Timings(result));
        });
    }

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &events);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        app.handle_event(events.next()?);
        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::player::RecordingPlayer;
    use crate::models::NOT_SET;
    use chrono::NaiveTime;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Clock whose time the test moves forward by hand.
    struct SharedClock(Rc<Cell<NaiveTime>>);

    impl Clock for SharedClock {
        fn now(&self) -> NaiveTime {
            self.0.get()
        }
    }

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).expect("valid time")
    }

    fn app_at(start: NaiveTime) -> (App, Rc<Cell<NaiveTime>>, RecordingPlayer) {
        let now = Rc::new(Cell::new(start));
        let player = RecordingPlayer::default();
        let app = App::new(
            &AppConfig::default(),
            Box::new(player.clone()),
            Box::new(SharedClock(now.clone())),
        );
        (app, now, player)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn fajr_set_to_current_minute_rings_at_second_zero() {
        let (mut app, now, player) = app_at(hms(5, 11, 58));
        app.schedule.set_target(PrayerName::Fajr, TargetTime::new(5, 12).unwrap());

        app.handle_event(Event::Tick);
        assert_eq!(app.alarm_state(), AlarmState::Idle);

        now.set(hms(5, 12, 0));
        app.handle_event(Event::Tick);
        assert_eq!(app.alarm_state(), AlarmState::Active(PrayerName::Fajr));
        assert_eq!(app.alarm.notification(), Some("It's time for Fajr"));
        assert_eq!(app.reading.display, "05:12:00 AM");
        assert!(screen(&app).contains("It's time for Fajr"));

        now.set(hms(5, 12, 1));
        app.handle_event(Event::Tick);
        assert_eq!(app.alarm_state(), AlarmState::Idle);
        assert_eq!(player.log.borrow().plays, 1);
    }

    #[test]
    fn target_entered_by_keyboard_drives_the_alarm() {
        let (mut app, now, _) = app_at(hms(15, 4, 0));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_prayer(), PrayerName::Asr);

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input_mode, InputMode::EditTarget);
        type_str(&mut app, "15:05");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(
            app.schedule.target(PrayerName::Asr),
            Some(TargetTime::new(15, 5).unwrap())
        );

        now.set(hms(15, 5, 0));
        app.handle_event(Event::Tick);
        assert_eq!(app.alarm_state(), AlarmState::Active(PrayerName::Asr));
    }

    #[test]
    fn malformed_input_is_kept_out_of_the_schedule() {
        let (mut app, _, _) = app_at(hms(12, 0, 0));
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "25:00");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::EditTarget);
        assert!(app.input_error.is_some());
        assert_eq!(app.schedule.target(PrayerName::Fajr), None);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.input_error, None);
        assert_eq!(app.schedule.target(PrayerName::Fajr), None);
    }

    #[test]
    fn clearing_a_target_stops_it_matching() {
        let (mut app, now, player) = app_at(hms(19, 19, 59));
        app.schedule.set_target(PrayerName::Fajr, TargetTime::new(19, 20).unwrap());
        press(&mut app, KeyCode::Char('c'));

        now.set(hms(19, 20, 0));
        app.handle_event(Event::Tick);
        assert_eq!(app.alarm_state(), AlarmState::Idle);
        assert_eq!(player.log.borrow().plays, 0);
    }

    #[test]
    fn dismiss_wears_off_on_the_next_matching_tick() {
        let (mut app, now, player) = app_at(hms(18, 1, 0));
        app.schedule.set_target(PrayerName::Maghrib, TargetTime::new(18, 1).unwrap());
        app.handle_event(Event::Tick);
        assert!(app.alarm_state().is_active());

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.alarm_state(), AlarmState::Idle);
        assert_eq!(app.alarm.notification(), None);
        assert!(!player.log.borrow().playing);

        // Still inside 18:01:00: the alarm comes straight back.
        app.handle_event(Event::Tick);
        assert_eq!(app.alarm_state(), AlarmState::Active(PrayerName::Maghrib));
        assert!(player.log.borrow().playing);

        press(&mut app, KeyCode::Char('o'));
        now.set(hms(18, 1, 1));
        app.handle_event(Event::Tick);
        assert_eq!(app.alarm_state(), AlarmState::Idle);
        assert_eq!(app.alarm.notification(), None);
    }

    #[test]
    fn alarm_toggle_silences_and_relabels() {
        let (mut app, now, player) = app_at(hms(11, 41, 0));
        app.schedule.set_target(PrayerName::Dhuhr, TargetTime::new(11, 41).unwrap());
        app.handle_event(Event::Tick);
        assert!(screen(&app).contains("Turn Alarm Off"));

        press(&mut app, KeyCode::Char('a'));
        assert!(!app.alarm.enabled());
        assert_eq!(app.alarm_state(), AlarmState::Idle);
        assert!(!player.log.borrow().playing);
        assert!(screen(&app).contains("Turn Alarm On"));

        app.handle_event(Event::Tick);
        press(&mut app, KeyCode::Char('a'));
        now.set(hms(11, 41, 1));
        app.handle_event(Event::Tick);
        assert_eq!(app.alarm_state(), AlarmState::Idle);
        assert_eq!(player.log.borrow().plays, 1);
    }

    #[test]
    fn theme_toggle_leaves_schedule_and_alarm_alone() {
        let (mut app, _, player) = app_at(hms(4, 30, 0));
        app.schedule.set_target(PrayerName::Fajr, TargetTime::new(4, 30).unwrap());
        app.handle_event(Event::Tick);

        let schedule_before = app.schedule.clone();
        let state_before = app.alarm_state();
        let plays_before = player.log.borrow().plays;
        assert!(!app.dark_mode);
        assert!(screen(&app).contains("Dark Mode"));

        press(&mut app, KeyCode::Char('t'));
        assert!(app.dark_mode);
        assert!(screen(&app).contains("Light Mode"));
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('t'));

        assert_eq!(app.schedule, schedule_before);
        assert_eq!(app.alarm_state(), state_before);
        assert_eq!(player.log.borrow().plays, plays_before);
    }

    #[test]
    fn failed_fetch_leaves_every_reference_not_set() {
        let (mut app, _, _) = app_at(hms(9, 0, 0));
        let err = crate::timings::client::parse_timings("not json").unwrap_err();
        app.handle_event(Event::Timings(Err(err)));

        for prayer in PrayerName::ALL {
            assert_eq!(app.schedule.reference_display(prayer), NOT_SET);
        }
        assert_eq!(screen(&app).matches(NOT_SET).count(), 5);
        assert!(!app.should_quit);
    }

    #[test]
    fn fetched_times_are_shown_once() {
        let (mut app, _, _) = app_at(hms(9, 0, 0));
        let times = ReferenceTimes::new(
            ["04:02", "11:41", "15:05", "18:01", "19:20"].map(String::from),
        );
        app.handle_event(Event::Timings(Ok(times)));
        let later = ReferenceTimes::new(["00:00"; 5].map(String::from));
        app.handle_event(Event::Timings(Ok(later)));

        assert_eq!(app.schedule.reference_display(PrayerName::Isha), "19:20");
        let shown = screen(&app);
        assert!(shown.contains("Actual Time: 04:02"));
        assert!(!shown.contains(NOT_SET));
    }

    #[test]
    fn release_events_and_help_overlay_do_not_leak_actions() {
        let (mut app, _, _) = app_at(hms(9, 0, 0));
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        app.handle_event(Event::Key(release));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
