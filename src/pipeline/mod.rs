//! Pipeline composition and execution for Alkire-Foster measurement.

mod result;
mod runner;

pub use result::{MpiResult, SubgroupAnalysis};
pub use runner::{run_af, MpiConfig, Pipeline};
