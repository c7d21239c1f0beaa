use tickwatch_engine::coords::Vec2;

/// Inbound notifications from the host framework.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Periodic refresh. `dt` is seconds since the previous tick.
    Tick { dt: f64 },
    /// The clock display's allocated box changed to `allocated`.
    SizeChanged { allocated: Vec2 },
    /// The start/stop control was activated.
    StartStopPressed,
    /// The reset control was activated.
    ResetPressed,
}
