//! Collected output of a pipeline run.

use crate::error::Result;
use crate::index::{DimensionBreakdown, MpiSummary};
use crate::score::{CensoredScores, DeprivationScores};
use crate::subgroup::{SubgroupProducts, SubgroupShares};
use serde::{Deserialize, Serialize};

/// Subgroup shares and their cross-attribute products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubgroupAnalysis {
    pub shares: Vec<SubgroupShares>,
    pub products: SubgroupProducts,
}

/// Every artifact produced by a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MpiResult {
    /// Pipeline name.
    pub name: String,
    /// Dimension names in column order.
    pub dimension_names: Vec<String>,
    /// Binary deprivation matrix, row-major.
    pub deprivation_matrix: Vec<Vec<u8>>,
    /// Weighted deprivation matrix, row-major.
    pub weighted_matrix: Vec<Vec<f64>>,
    pub scores: DeprivationScores,
    pub censored: CensoredScores,
    pub summary: MpiSummary,
    pub dimensions: Vec<DimensionBreakdown>,
    /// Dimensions whose cutoff never occurred in the data.
    pub unobserved_cutoffs: Vec<String>,
    /// Present when demographics were supplied and at least one individual is poor.
    pub subgroups: Option<SubgroupAnalysis>,
}

impl MpiResult {
    /// Headcount ratio H (%).
    pub fn headcount_ratio(&self) -> f64 {
        self.summary.headcount_ratio
    }

    /// Average deprivation score A (%), if anyone is poor.
    pub fn average_deprivation(&self) -> Option<f64> {
        self.summary.average_deprivation
    }

    /// Adjusted headcount ratio M0 (%), if anyone is poor.
    pub fn adjusted_headcount(&self) -> Option<f64> {
        self.summary.adjusted_headcount
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
