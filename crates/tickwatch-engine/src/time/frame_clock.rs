use std::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds elapsed since the previous tick.
    pub dt: f64,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Deltas are not clamped: a stopwatch fed from this clock must account for
/// every second that passed, including stalls while the window was hidden.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Creates a clock whose first delta is measured from `start`.
    pub fn starting_at(start: Instant) -> Self {
        Self { last: start, frame_index: 0 }
    }

    /// Advances the clock to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// A `now` earlier than the previous tick yields `dt == 0`.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last);
        self.last = self.last.max(now);

        let ft = FrameTime {
            dt: dt.as_secs_f64(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn dt_matches_instant_gap() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let ft = clock.tick_at(start + Duration::from_millis(250));
        assert!((ft.dt - 0.25).abs() < 1e-9);
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn long_stall_is_not_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let ft = clock.tick_at(start + Duration::from_secs(5));
        assert!((ft.dt - 5.0).abs() < 1e-9);
    }

    #[test]
    fn frame_index_increments() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let a = clock.tick_at(start + Duration::from_millis(16));
        let b = clock.tick_at(start + Duration::from_millis(32));
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert!((b.dt - 0.016).abs() < 1e-9);
    }

    #[test]
    fn backwards_instant_gives_zero_dt() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start + Duration::from_secs(1));
        let ft = clock.tick_at(start);
        assert_eq!(ft.dt, 0.0);
    }
}
