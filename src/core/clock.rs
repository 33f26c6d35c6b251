use crate::core::Clock;
use chrono::{DateTime, FixedOffset, Local};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// 固定時間，測試用
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(time: DateTime<FixedOffset>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.time
    }
}
