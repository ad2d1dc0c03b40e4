//! Weighted deprivation matrix.

use super::DeprivationMatrix;
use crate::data::DimensionSet;
use crate::error::Result;
use nalgebra::DMatrix;

/// Deprivation indicators scaled by dimension weight.
#[derive(Debug, Clone)]
pub struct WeightedDeprivationMatrix {
    /// Weighted indicators (individuals × dimensions).
    pub data: DMatrix<f64>,
    /// Individual identifiers (row names).
    pub individual_ids: Vec<String>,
    /// Dimension names (column names).
    pub dimension_names: Vec<String>,
    /// Weight applied to each column.
    pub weights: Vec<f64>,
}

impl WeightedDeprivationMatrix {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    pub fn n_individuals(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_dimensions(&self) -> usize {
        self.data.ncols()
    }

    /// Row-major copy of the weighted indicators.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

/// Scale each deprivation column by its dimension's weight.
///
/// Weights are resolved by the matrix's dimension names.
pub fn weighted_deprivation_matrix(
    deprivation: &DeprivationMatrix,
    dimensions: &DimensionSet,
) -> Result<WeightedDeprivationMatrix> {
    let aligned = dimensions.align_names(deprivation.dimension_names())?;

    let mut data = deprivation.data.map(f64::from);
    for (mut col, &weight) in data.column_iter_mut().zip(&aligned.weights) {
        col *= weight;
    }

    Ok(WeightedDeprivationMatrix {
        data,
        individual_ids: deprivation.individual_ids().to_vec(),
        dimension_names: aligned.names,
        weights: aligned.weights,
    })
}
