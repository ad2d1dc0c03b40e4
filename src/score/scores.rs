//! Per-individual deprivation scores.

use crate::deprivation::WeightedDeprivationMatrix;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Weighted deprivation score for each individual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeprivationScores {
    /// Individual identifiers.
    pub individual_ids: Vec<String>,
    /// Score per individual, in `[0, sum of weights]`.
    pub values: Vec<f64>,
}

impl DeprivationScores {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Sum each individual's weighted indicators into a single score.
pub fn deprivation_scores(weighted: &WeightedDeprivationMatrix) -> DeprivationScores {
    let values: Vec<f64> = (0..weighted.n_individuals())
        .into_par_iter()
        .map(|row| weighted.data.row(row).sum())
        .collect();

    DeprivationScores {
        individual_ids: weighted.individual_ids.clone(),
        values,
    }
}
