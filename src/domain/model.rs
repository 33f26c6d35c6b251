use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::fmt;

pub const DEFAULT_GREETING: &str = "Hello, World! From Golang.";
pub const DEFAULT_COUNT_START: i64 = 1;
pub const DEFAULT_COUNT_END: i64 = 5;
pub const DEFAULT_ADDENDS: (i64, i64) = (10, 5);

/// 單行輸出，`Display` 即為寫到 stdout 的內容 (不含換行)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Greeting(String),
    CurrentTime(DateTime<FixedOffset>),
    Count(i64),
    Sum { a: i64, b: i64, sum: i64 },
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Greeting(message) => write!(f, "{}", message),
            ReportLine::CurrentTime(time) => write!(
                f,
                "Current time: {}",
                time.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            ReportLine::Count(n) => write!(f, "Count: {}", n),
            ReportLine::Sum { a, b, sum } => write!(f, "{} + {} = {}", a, b, sum),
        }
    }
}
