//! Composable Alkire-Foster Multidimensional Poverty Library
//!
//! This library computes the Alkire-Foster (AF) multidimensional poverty
//! index and its subgroup decomposition from already-parsed survey tables.
//!
//! # Overview
//!
//! The library is organized into composable modules, each a pure stage:
//!
//! - **data**: Core data structures (AchievementMatrix, DimensionSet, Demographics)
//! - **deprivation**: Deprivation identification (binary and weighted matrices)
//! - **score**: Deprivation scores and censoring at the poverty cutoff k
//! - **index**: Headcount ratio (H), intensity (A), adjusted headcount (M0)
//! - **subgroup**: Poor-population shares by demographic category and their products
//! - **pipeline**: Pipeline composition, configuration and results
//!
//! # Example
//!
//! ```
//! use alkire_foster::prelude::*;
//!
//! let achievements = AchievementMatrix::from_rows(
//!     vec!["schooling".into(), "health".into()],
//!     vec![
//!         vec![Value::from(1), Value::from(0)],
//!         vec![Value::from(1), Value::from(1)],
//!         vec![Value::from(0), Value::from(0)],
//!     ],
//! )
//! .unwrap();
//!
//! let result = Pipeline::new()
//!     .poverty_cutoff(0.5)
//!     .dimension("schooling", 1, 0.5)
//!     .dimension("health", 1, 0.5)
//!     .run(&achievements)
//!     .unwrap();
//!
//! assert!((result.adjusted_headcount().unwrap() - 25.0).abs() < 1e-10);
//! ```

pub mod data;
pub mod deprivation;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod score;
pub mod subgroup;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::{
        AchievementMatrix, AlignedDimensions, Demographics, Dimension, DimensionSet, Value,
    };
    pub use crate::deprivation::{
        deprivation_matrix, weighted_deprivation_matrix, DeprivationMatrix,
        WeightedDeprivationMatrix,
    };
    pub use crate::error::{MpiError, Result};
    pub use crate::index::{
        adjusted_headcount_ratio, average_deprivation_score, censored_headcount_ratios,
        dimension_breakdown, dimension_contributions, headcount_ratio, mpi_summary,
        DimensionBreakdown, MpiSummary,
    };
    pub use crate::pipeline::{run_af, MpiConfig, MpiResult, Pipeline, SubgroupAnalysis};
    pub use crate::score::{
        censor, censor_scores, deprivation_scores, validate_poverty_cutoff, CensoredScores,
        DeprivationScores,
    };
    pub use crate::subgroup::{
        subgroup_products, subgroup_shares, AttributePair, CategoryShare, ProductEntry,
        SubgroupProducts, SubgroupShares,
    };
}
