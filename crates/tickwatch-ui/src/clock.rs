use chrono::{Local, NaiveTime, Timelike};

use tickwatch_markup::MarkupWriter;

/// Source of the current local time.
///
/// Closures returning a `NaiveTime` implement this, which is how tests pin
/// the clock.
pub trait WallClock {
    fn now(&self) -> NaiveTime;
}

/// The host system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

impl<F> WallClock for F
where
    F: Fn() -> NaiveTime,
{
    fn now(&self) -> NaiveTime {
        self()
    }
}

/// Formats wall-clock time as `[b]HH[/b]:MM:SS`, 24-hour.
pub struct TimeDisplay;

impl TimeDisplay {
    pub fn render<T: Timelike>(time: &T) -> String {
        MarkupWriter::new()
            .bold(&format!("{:02}", time.hour()))
            .text(&format!(":{:02}:{:02}", time.minute(), time.second()))
            .finish()
    }

    pub fn render_now(clock: &dyn WallClock) -> String {
        Self::render(&clock.now())
    }
}
