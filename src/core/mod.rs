pub mod assembler;
pub mod engine;
pub mod filter;
pub mod loader;
pub mod pipeline;
pub mod preamble;
pub mod scan;
pub mod writer;

pub use crate::domain::model::{
    AmalgamReport, AssembledOutput, FilteredBlock, Fragment, FragmentStats, Preamble,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
