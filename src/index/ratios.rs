//! Headcount ratio, average deprivation score and adjusted headcount ratio.
//!
//! All three are reported as percentages.

use crate::error::{MpiError, Result};
use crate::score::CensoredScores;
use serde::{Deserialize, Serialize};

/// Headcount ratio H: percentage of the population identified as poor.
///
/// Fails with [`MpiError::EmptyPopulation`] on an empty vector.
pub fn headcount_ratio(censored: &[f64]) -> Result<f64> {
    if censored.is_empty() {
        return Err(MpiError::EmptyPopulation);
    }
    let n_poor = count_poor(censored);
    Ok(100.0 * (n_poor as f64 / censored.len() as f64))
}

/// Average deprivation score A: `100 * (sum of censored scores / n_dimensions) / q`.
///
/// `n_dimensions` must be the dimension count used to build the weighted
/// matrix. Fails with [`MpiError::NoPoorIndividuals`] when no censored score
/// is positive.
pub fn average_deprivation_score(censored: &[f64], n_dimensions: usize) -> Result<f64> {
    if n_dimensions == 0 {
        return Err(MpiError::InvalidParameter(
            "Number of dimensions must be positive".to_string(),
        ));
    }
    let n_poor = count_poor(censored);
    if n_poor == 0 {
        return Err(MpiError::NoPoorIndividuals(
            "average deprivation score is undefined".to_string(),
        ));
    }
    let scores_sum: f64 = censored.iter().sum();
    Ok(100.0 * (scores_sum / n_dimensions as f64) / n_poor as f64)
}

/// Adjusted headcount ratio M0 = H × A / 100, with H and A given as percentages.
pub fn adjusted_headcount_ratio(headcount_ratio: f64, average_deprivation_score: f64) -> f64 {
    headcount_ratio * average_deprivation_score / 100.0
}

fn count_poor(censored: &[f64]) -> usize {
    censored.iter().filter(|&&s| s > 0.0).count()
}

/// Summary of the headline Alkire-Foster statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MpiSummary {
    /// Population size (n).
    pub n_individuals: usize,
    /// Number of poor individuals (q).
    pub n_poor: usize,
    /// Number of dimensions used for A.
    pub n_dimensions: usize,
    /// Poverty cutoff k.
    pub poverty_cutoff: f64,
    /// Headcount ratio H (%).
    pub headcount_ratio: f64,
    /// Average deprivation score A (%); `None` when nobody is poor.
    pub average_deprivation: Option<f64>,
    /// Adjusted headcount ratio M0 (%); `None` when nobody is poor.
    pub adjusted_headcount: Option<f64>,
}

impl MpiSummary {
    /// Whether anyone was identified as poor.
    pub fn has_poor(&self) -> bool {
        self.n_poor > 0
    }
}

impl std::fmt::Display for MpiSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Alkire-Foster Summary")?;
        writeln!(f, "  Individuals:    {}", self.n_individuals)?;
        writeln!(f, "  Dimensions:     {}", self.n_dimensions)?;
        writeln!(f, "  Poverty cutoff: {}", self.poverty_cutoff)?;
        writeln!(f, "  Poor:           {}", self.n_poor)?;
        writeln!(f, "  H:  {:.2}%", self.headcount_ratio)?;
        match (self.average_deprivation, self.adjusted_headcount) {
            (Some(a), Some(m0)) => {
                writeln!(f, "  A:  {:.2}%", a)?;
                writeln!(f, "  M0: {:.2}%", m0)?;
            }
            _ => {
                writeln!(f, "  A:  undefined (no poor individuals)")?;
                writeln!(f, "  M0: undefined (no poor individuals)")?;
            }
        }
        Ok(())
    }
}

/// Compute H, A and M0 for a censored vector.
///
/// Unlike [`average_deprivation_score`], a population with no poor
/// individuals is not an error here: A and M0 are reported as `None`.
pub fn mpi_summary(censored: &CensoredScores, n_dimensions: usize) -> Result<MpiSummary> {
    let h = headcount_ratio(censored.values())?;
    let a = match average_deprivation_score(censored.values(), n_dimensions) {
        Ok(a) => Some(a),
        Err(MpiError::NoPoorIndividuals(_)) => None,
        Err(e) => return Err(e),
    };

    Ok(MpiSummary {
        n_individuals: censored.len(),
        n_poor: censored.n_poor(),
        n_dimensions,
        poverty_cutoff: censored.poverty_cutoff,
        headcount_ratio: h,
        average_deprivation: a,
        adjusted_headcount: a.map(|a| adjusted_headcount_ratio(h, a)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_worked_example() {
        let censored = [0.5, 1.0, 0.0];
        let h = headcount_ratio(&censored).unwrap();
        let a = average_deprivation_score(&censored, 2).unwrap();
        let m0 = adjusted_headcount_ratio(h, a);

        assert_relative_eq!(h, 200.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(a, 37.5, epsilon = 1e-10);
        assert_relative_eq!(m0, 25.0, epsilon = 1e-10);
    }

    #[test]
    fn test_headcount_bounds() {
        assert_relative_eq!(headcount_ratio(&[0.4, 0.6]).unwrap(), 100.0);
        assert_relative_eq!(headcount_ratio(&[0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_headcount_empty_population() {
        assert!(matches!(headcount_ratio(&[]), Err(MpiError::EmptyPopulation)));
    }

    #[test]
    fn test_average_no_poor() {
        let result = average_deprivation_score(&[0.0, 0.0, 0.0], 3);
        assert!(matches!(result, Err(MpiError::NoPoorIndividuals(_))));
    }

    #[test]
    fn test_average_zero_dimensions() {
        let result = average_deprivation_score(&[0.5], 0);
        assert!(matches!(result, Err(MpiError::InvalidParameter(_))));
    }

    #[test]
    fn test_m0_is_product() {
        for &(h, a) in &[(66.0, 40.0), (12.5, 80.0), (0.0, 50.0), (100.0, 100.0)] {
            assert_eq!(adjusted_headcount_ratio(h, a), h * a / 100.0);
        }
    }

    #[test]
    fn test_summary() {
        let censored = CensoredScores::from_values(vec![0.5, 1.0, 0.0], 0.5);
        let summary = mpi_summary(&censored, 2).unwrap();
        assert_eq!(summary.n_individuals, 3);
        assert_eq!(summary.n_poor, 2);
        assert_relative_eq!(summary.adjusted_headcount.unwrap(), 25.0, epsilon = 1e-10);
        assert!(summary.to_string().contains("M0: 25.00%"));
    }

    #[test]
    fn test_summary_without_poor() {
        let censored = CensoredScores::from_values(vec![0.0, 0.0], 0.5);
        let summary = mpi_summary(&censored, 2).unwrap();
        assert!(!summary.has_poor());
        assert_eq!(summary.headcount_ratio, 0.0);
        assert_eq!(summary.average_deprivation, None);
        assert_eq!(summary.adjusted_headcount, None);
        assert!(summary.to_string().contains("undefined"));
    }
}
