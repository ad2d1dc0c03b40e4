//! Binary deprivation matrix (g0).

use crate::data::{AchievementMatrix, DimensionSet};
use crate::error::Result;
use nalgebra::DMatrix;

/// 0/1 deprivation indicators (individuals × dimensions).
#[derive(Debug, Clone)]
pub struct DeprivationMatrix {
    /// Indicator matrix, 1 where the achievement equals the cutoff.
    pub data: DMatrix<u8>,
    /// Individual identifiers (row names).
    pub individual_ids: Vec<String>,
    /// Dimension names (column names).
    pub dimension_names: Vec<String>,
    /// Dimensions whose cutoff never occurs in the data.
    unobserved_cutoffs: Vec<String>,
}

impl DeprivationMatrix {
    /// Indicator at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[(row, col)]
    }

    #[inline]
    pub fn is_deprived(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == 1
    }

    pub fn n_individuals(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_dimensions(&self) -> usize {
        self.data.ncols()
    }

    pub fn individual_ids(&self) -> &[String] {
        &self.individual_ids
    }

    pub fn dimension_names(&self) -> &[String] {
        &self.dimension_names
    }

    /// Number of deprived individuals per dimension (uncensored).
    pub fn column_counts(&self) -> Vec<usize> {
        self.data
            .column_iter()
            .map(|col| col.iter().filter(|&&v| v == 1).count())
            .collect()
    }

    /// Dimensions whose column is all zero because the cutoff value was never observed.
    pub fn unobserved_cutoffs(&self) -> &[String] {
        &self.unobserved_cutoffs
    }

    /// Row-major copy of the indicators.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.data
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

/// Build the deprivation matrix.
///
/// Cell (i, j) is 1 iff individual i's achievement in dimension j equals that
/// dimension's cutoff exactly. Continuous data must be discretized by the
/// caller beforehand. Cutoffs are resolved by dimension name.
///
/// A cutoff that never occurs in its column is not an error; it is reported
/// through [`DeprivationMatrix::unobserved_cutoffs`] and a warning.
pub fn deprivation_matrix(
    achievements: &AchievementMatrix,
    dimensions: &DimensionSet,
) -> Result<DeprivationMatrix> {
    let aligned = dimensions.align_to(achievements)?;
    let n = achievements.n_individuals();
    let d = achievements.n_dimensions();

    let data = DMatrix::from_fn(n, d, |row, col| {
        u8::from(achievements.get(row, col).matches(&aligned.cutoffs[col]))
    });

    let unobserved_cutoffs: Vec<String> = data
        .column_iter()
        .zip(&aligned.names)
        .filter(|(col, _)| n > 0 && col.iter().all(|&v| v == 0))
        .map(|(_, name)| name.clone())
        .collect();
    for name in &unobserved_cutoffs {
        tracing::warn!(dimension = %name, "cutoff value never observed; deprivation column is all zero");
    }

    Ok(DeprivationMatrix {
        data,
        individual_ids: achievements.individual_ids().to_vec(),
        dimension_names: aligned.names,
        unobserved_cutoffs,
    })
}
