/// Fixed-timestep accumulator
///
/// Frame times measured by the caller are converted into a bounded number of
/// simulation ticks of `FIXED_TIMESTEP` seconds each, so the jump arc, death
/// rise and wander timers advance at a steady rate no matter how unevenly
/// the front end renders.
use std::time::Duration;

/// Simulation tick rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
pub const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks per frame to prevent spiral of death
pub const MAX_PHYSICS_STEPS: u32 = 5;

/// Game loop timing state
#[derive(Debug, Default)]
pub struct GameLoop {
    /// Frame time not yet spent on ticks
    accumulator: Duration,

    /// Frames fed to `advance`
    frame_count: u64,

    /// Total ticks handed out
    update_count: u64,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for `frame_time` of wall-clock time and return the number of
    /// fixed ticks it buys
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;
        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_PHYSICS_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }

        // Drop the backlog a hitch could not pay off
        if updates == MAX_PHYSICS_STEPS && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::debug!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.update_count += updates as u64;
        updates
    }

    /// Get total number of frames advanced
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of updates executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}
