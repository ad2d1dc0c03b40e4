//! Breakdown of poverty by dimension: censored headcounts and contributions.

use crate::deprivation::{DeprivationMatrix, WeightedDeprivationMatrix};
use crate::error::{MpiError, Result};
use crate::score::CensoredScores;
use serde::{Deserialize, Serialize};

/// Per-dimension poverty statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBreakdown {
    pub dimension: String,
    /// Percentage of the population deprived in this dimension.
    pub uncensored_headcount: f64,
    /// Percentage of the population both poor and deprived in this dimension.
    pub censored_headcount: f64,
    /// Percentage of total censored deprivation attributable to this dimension.
    /// `None` when nobody is poor.
    pub contribution: Option<f64>,
}

fn check_rows(context: &str, expected: usize, censored: &CensoredScores) -> Result<()> {
    if censored.len() != expected {
        return Err(MpiError::alignment(context, expected, censored.len()));
    }
    if expected == 0 {
        return Err(MpiError::EmptyPopulation);
    }
    Ok(())
}

/// Censored headcount ratio per dimension, in the matrix's column order.
pub fn censored_headcount_ratios(
    deprivation: &DeprivationMatrix,
    censored: &CensoredScores,
) -> Result<Vec<f64>> {
    let n = deprivation.n_individuals();
    check_rows("censored scores vs deprivation rows", n, censored)?;

    Ok((0..deprivation.n_dimensions())
        .map(|col| {
            let count = (0..n)
                .filter(|&row| censored.is_poor(row) && deprivation.is_deprived(row, col))
                .count();
            100.0 * count as f64 / n as f64
        })
        .collect())
}

/// Percentage contribution of each dimension to overall censored deprivation.
///
/// Contributions sum to 100. Fails with [`MpiError::NoPoorIndividuals`]
/// when no individual is poor.
pub fn dimension_contributions(
    weighted: &WeightedDeprivationMatrix,
    censored: &CensoredScores,
) -> Result<Vec<f64>> {
    let n = weighted.n_individuals();
    check_rows("censored scores vs weighted rows", n, censored)?;

    let per_dimension: Vec<f64> = (0..weighted.n_dimensions())
        .map(|col| {
            (0..n)
                .filter(|&row| censored.is_poor(row))
                .map(|row| weighted.get(row, col))
                .sum()
        })
        .collect();
    let total: f64 = per_dimension.iter().sum();
    if censored.n_poor() == 0 || total <= 0.0 {
        return Err(MpiError::NoPoorIndividuals(
            "dimension contributions are undefined".to_string(),
        ));
    }

    Ok(per_dimension.iter().map(|v| 100.0 * v / total).collect())
}

/// Full per-dimension breakdown.
pub fn dimension_breakdown(
    deprivation: &DeprivationMatrix,
    weighted: &WeightedDeprivationMatrix,
    censored: &CensoredScores,
) -> Result<Vec<DimensionBreakdown>> {
    let n = deprivation.n_individuals();
    let censored_headcounts = censored_headcount_ratios(deprivation, censored)?;
    let contributions = match dimension_contributions(weighted, censored) {
        Ok(c) => c.into_iter().map(Some).collect(),
        Err(MpiError::NoPoorIndividuals(_)) => vec![None; deprivation.n_dimensions()],
        Err(e) => return Err(e),
    };

    Ok(deprivation
        .dimension_names()
        .iter()
        .zip(deprivation.column_counts())
        .zip(censored_headcounts)
        .zip(contributions)
        .map(|(((name, count), censored_headcount), contribution)| DimensionBreakdown {
            dimension: name.clone(),
            uncensored_headcount: 100.0 * count as f64 / n as f64,
            censored_headcount,
            contribution,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AchievementMatrix, Dimension, DimensionSet, Value};
    use crate::deprivation::{deprivation_matrix, weighted_deprivation_matrix};
    use crate::score::{censor, deprivation_scores};
    use approx::assert_relative_eq;

    fn build(k: f64) -> (DeprivationMatrix, WeightedDeprivationMatrix, CensoredScores) {
        // 4 individuals × 3 dimensions
        let achievements = AchievementMatrix::from_rows(
            vec!["schooling".into(), "health".into(), "water".into()],
            vec![
                vec![Value::from(1), Value::from(1), Value::from(0)],
                vec![Value::from(0), Value::from(1), Value::from(1)],
                vec![Value::from(1), Value::from(0), Value::from(0)],
                vec![Value::from(0), Value::from(0), Value::from(0)],
            ],
        )
        .unwrap();
        let dims = DimensionSet::new(vec![
            Dimension::new("schooling", 1, 0.5),
            Dimension::new("health", 1, 0.25),
            Dimension::new("water", 1, 0.25),
        ])
        .unwrap();
        let g0 = deprivation_matrix(&achievements, &dims).unwrap();
        let weighted = weighted_deprivation_matrix(&g0, &dims).unwrap();
        let censored = censor(&deprivation_scores(&weighted), k);
        (g0, weighted, censored)
    }

    #[test]
    fn test_censored_headcounts() {
        // scores: 0.75, 0.5, 0.5, 0.0 -> at k = 0.6 only the first is poor
        let (g0, _, censored) = build(0.6);
        let ch = censored_headcount_ratios(&g0, &censored).unwrap();
        assert_eq!(ch, vec![25.0, 25.0, 0.0]);
    }

    #[test]
    fn test_contributions_sum_to_100() {
        let (_, weighted, censored) = build(0.5);
        let contributions = dimension_contributions(&weighted, &censored).unwrap();
        // poor: first three; weighted sums: schooling 1.0, health 0.5, water 0.25
        assert_relative_eq!(contributions[0], 100.0 * 1.0 / 1.75, epsilon = 1e-10);
        assert_relative_eq!(contributions.iter().sum::<f64>(), 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_contributions_no_poor() {
        let (_, weighted, censored) = build(0.9);
        assert!(matches!(
            dimension_contributions(&weighted, &censored),
            Err(MpiError::NoPoorIndividuals(_))
        ));
    }

    #[test]
    fn test_breakdown() {
        let (g0, weighted, censored) = build(0.9);
        let breakdown = dimension_breakdown(&g0, &weighted, &censored).unwrap();
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0].dimension, "schooling");
        assert_relative_eq!(breakdown[0].uncensored_headcount, 50.0);
        assert_relative_eq!(breakdown[0].censored_headcount, 0.0);
        assert_eq!(breakdown[0].contribution, None);
    }

    #[test]
    fn test_row_mismatch() {
        let (g0, _, _) = build(0.5);
        let censored = CensoredScores::from_values(vec![0.5], 0.5);
        assert!(matches!(
            censored_headcount_ratios(&g0, &censored),
            Err(MpiError::Alignment { expected: 4, actual: 1, .. })
        ));
    }
}
