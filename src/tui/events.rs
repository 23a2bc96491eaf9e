use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::{Local, Timelike};
use crossterm::event::{self, Event as CEvent, KeyEvent};

use crate::models::ReferenceTimes;
use crate::timings::FetchError;

/// Lands each tick just past the wall-clock boundary, never just before it.
const TICK_SLACK: Duration = Duration::from_millis(5);

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    /// Outcome of the startup timings fetch.
    Timings(Result<ReferenceTimes, FetchError>),
}

pub struct EventHandler {
    tx: mpsc::Sender<Event>,
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let input_tx = tx.clone();

        thread::spawn(move || {
            produce(&input_tx, tick_rate_ms, || Local::now().nanosecond(), poll_key);
        });

        Self { tx, rx }
    }

    /// Extra producer for work that finishes off the input thread.
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

fn poll_key(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if !event::poll(timeout).unwrap_or(false) {
        return Ok(None);
    }
    match event::read()? {
        CEvent::Key(key) => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Time from a wall-clock reading (`nanos` into the current second) to the
/// start of the next tick period.
pub fn next_tick_delay(nanos: u32, tick_rate_ms: u64) -> Duration {
    let tick_rate_ms = tick_rate_ms.max(1);
    // Leap seconds report nanos >= 1e9.
    let ms_into_second = u64::from(nanos.min(999_999_999) / 1_000_000);
    let ms_into_period = ms_into_second % tick_rate_ms;
    Duration::from_millis(tick_rate_ms - ms_into_period) + TICK_SLACK
}

/// Forward keys and ticks until the receiving side hangs up or input fails.
fn produce<N, P>(tx: &mpsc::Sender<Event>, tick_rate_ms: u64, nanos: N, mut poll: P)
where
    N: Fn() -> u32,
    P: FnMut(Duration) -> io::Result<Option<KeyEvent>>,
{
    let mut next_tick = Instant::now() + next_tick_delay(nanos(), tick_rate_ms);
    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());

        match poll(timeout) {
            Ok(Some(key)) => {
                if tx.send(Event::Key(key)).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(_) => break,
        }

        if Instant::now() >= next_tick {
            if tx.send(Event::Tick).is_err() {
                break;
            }
            next_tick = Instant::now() + next_tick_delay(nanos(), tick_rate_ms);
        }
    }
}
