pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, manifest::AmalgamManifest};
pub use crate::core::{engine::AmalgamEngine, filter::ContentFilter, pipeline::AmalgamPipeline};
pub use utils::error::{AmalgamError, Result};
