//! Wall-clock hour used by time-of-day pricing

use chrono::Timelike;

pub trait Clock: Send + Sync {
    /// Current local hour, 0..=23
    fn hour(&self) -> u32;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// Pinned hour
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.0
    }
}
