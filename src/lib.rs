pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use self::core::{
    arith::add,
    clock::{FixedClock, SystemClock},
    report::ReportEngine,
};
pub use domain::model::ReportLine;
pub use utils::error::{KcError, Result};
