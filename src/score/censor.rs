//! Censoring of deprivation scores at the poverty cutoff k.

use super::DeprivationScores;
use crate::error::{MpiError, Result};
use serde::{Deserialize, Serialize};

/// Deprivation scores with the non-poor set to zero.
///
/// Individuals with a non-zero censored score are identified as poor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CensoredScores {
    /// Individual identifiers.
    pub individual_ids: Vec<String>,
    /// Censored score per individual.
    pub values: Vec<f64>,
    /// Poverty cutoff the scores were censored at.
    pub poverty_cutoff: f64,
}

impl CensoredScores {
    /// Build directly from censored values, e.g. scores loaded elsewhere.
    pub fn from_values(values: Vec<f64>, poverty_cutoff: f64) -> Self {
        let individual_ids = (0..values.len()).map(|i| i.to_string()).collect();
        Self {
            individual_ids,
            values,
            poverty_cutoff,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Whether individual `i` is identified as poor.
    #[inline]
    pub fn is_poor(&self, i: usize) -> bool {
        self.values[i] > 0.0
    }

    /// Number of poor individuals (q).
    pub fn n_poor(&self) -> usize {
        self.values.iter().filter(|&&s| s > 0.0).count()
    }

    pub fn poor_mask(&self) -> Vec<bool> {
        self.values.iter().map(|&s| s > 0.0).collect()
    }
}

/// Check that a poverty cutoff is usable.
pub fn validate_poverty_cutoff(k: f64) -> Result<()> {
    if !k.is_finite() || k < 0.0 {
        return Err(MpiError::InvalidParameter(format!(
            "Poverty cutoff k must be finite and non-negative, got {}",
            k
        )));
    }
    Ok(())
}

/// Zero every score below `k`. The boundary is inclusive: a score equal to k is kept.
///
/// Censoring is idempotent for a fixed k.
pub fn censor_scores(scores: &[f64], k: f64) -> Vec<f64> {
    scores
        .iter()
        .map(|&s| if s >= k { s } else { 0.0 })
        .collect()
}

/// Censor a score vector at poverty cutoff `k`.
pub fn censor(scores: &DeprivationScores, k: f64) -> CensoredScores {
    CensoredScores {
        individual_ids: scores.individual_ids.clone(),
        values: censor_scores(&scores.values, k),
        poverty_cutoff: k,
    }
}
