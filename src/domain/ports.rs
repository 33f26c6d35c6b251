use chrono::{DateTime, FixedOffset};

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

pub trait ConfigProvider {
    fn greeting(&self) -> &str;
    fn count_start(&self) -> i64;
    fn count_end(&self) -> i64;
    fn addends(&self) -> (i64, i64);
}
