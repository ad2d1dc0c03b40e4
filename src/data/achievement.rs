//! Achievement matrix: individuals × dimensions of raw survey values.

use super::Value;
use crate::error::{MpiError, Result};
use std::collections::HashSet;

/// Raw achievement values for a population.
///
/// Rows represent individuals, columns represent dimensions of wellbeing.
/// Cells are stored densely in row-major order.
#[derive(Debug, Clone)]
pub struct AchievementMatrix {
    /// Row-major cells (individuals × dimensions).
    cells: Vec<Value>,
    /// Individual identifiers (row names).
    individual_ids: Vec<String>,
    /// Dimension names (column names).
    dimension_names: Vec<String>,
}

impl AchievementMatrix {
    /// Create a new AchievementMatrix from rows and identifiers.
    ///
    /// Every row must hold exactly one value per dimension, and dimension
    /// names must be unique.
    pub fn new(
        individual_ids: Vec<String>,
        dimension_names: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self> {
        if individual_ids.len() != rows.len() {
            return Err(MpiError::alignment(
                "individual ids vs achievement rows",
                rows.len(),
                individual_ids.len(),
            ));
        }
        check_unique(&dimension_names)?;

        let n_dimensions = dimension_names.len();
        let mut cells = Vec::with_capacity(rows.len() * n_dimensions);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != n_dimensions {
                return Err(MpiError::alignment(
                    format!("achievement row {}", row_idx),
                    n_dimensions,
                    row.len(),
                ));
            }
            cells.extend(row);
        }

        Ok(Self {
            cells,
            individual_ids,
            dimension_names,
        })
    }

    /// Create a matrix whose individuals are identified by their row index.
    pub fn from_rows(dimension_names: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        let ids = (0..rows.len()).map(|i| i.to_string()).collect();
        Self::new(ids, dimension_names, rows)
    }

    /// Get the value at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &Value {
        &self.cells[row * self.n_dimensions() + col]
    }

    /// All values for one individual.
    pub fn row(&self, row: usize) -> &[Value] {
        let d = self.n_dimensions();
        &self.cells[row * d..(row + 1) * d]
    }

    /// All values for one dimension, in individual order.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Value> + '_ {
        (0..self.n_individuals()).map(move |row| self.get(row, col))
    }

    /// Number of individuals (rows).
    #[inline]
    pub fn n_individuals(&self) -> usize {
        self.individual_ids.len()
    }

    /// Number of dimensions (columns).
    #[inline]
    pub fn n_dimensions(&self) -> usize {
        self.dimension_names.len()
    }

    /// Individual identifiers.
    #[inline]
    pub fn individual_ids(&self) -> &[String] {
        &self.individual_ids
    }

    /// Dimension names in column order.
    #[inline]
    pub fn dimension_names(&self) -> &[String] {
        &self.dimension_names
    }

    /// Column index of a dimension.
    pub fn dimension_index(&self, name: &str) -> Option<usize> {
        self.dimension_names.iter().position(|n| n == name)
    }
}

pub(crate) fn check_unique(names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(MpiError::DuplicateName(name.clone()));
        }
    }
    Ok(())
}
