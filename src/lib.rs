pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::SystemClock;
pub use crate::config::render::{RenderConfig, Theme};
pub use crate::core::engine::{LookupEngine, LookupOutcome, SearchHit};
pub use crate::data::CountryTable;
pub use crate::domain::model::{
    ClassificationResult, CountryRecord, DisplayPayload, ParsedCandidate, ReferenceZone,
    StatusTier,
};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::{LookupError, Result};
