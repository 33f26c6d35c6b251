pub mod arith;
pub mod clock;
pub mod report;

pub use crate::domain::model::ReportLine;
pub use crate::domain::ports::{Clock, ConfigProvider};
pub use crate::utils::error::Result;
