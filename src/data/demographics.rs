//! Demographic attributes for subgroup decomposition.

use super::achievement::check_unique;
use super::Value;
use crate::error::{MpiError, Result};

/// Categorical attributes (region, gender, ...) for each individual.
///
/// Rows are aligned 1:1 with the rows of the achievement matrix; the
/// alignment is checked by row count when the table is used.
#[derive(Debug, Clone, Default)]
pub struct Demographics {
    /// Column names.
    column_names: Vec<String>,
    /// Data stored column-major: one vector per attribute.
    columns: Vec<Vec<Value>>,
    /// Number of individuals.
    n_rows: usize,
}

impl Demographics {
    /// Create demographics from row-major values.
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        check_unique(&column_names)?;

        let n_rows = rows.len();
        let mut columns: Vec<Vec<Value>> = vec![Vec::with_capacity(n_rows); column_names.len()];
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != column_names.len() {
                return Err(MpiError::alignment(
                    format!("demographics row {}", row_idx),
                    column_names.len(),
                    row.len(),
                ));
            }
            for (col, value) in row.into_iter().enumerate() {
                columns[col].push(value);
            }
        }

        Ok(Self {
            column_names,
            columns,
            n_rows,
        })
    }

    /// Create demographics from named columns.
    pub fn from_columns(columns: Vec<(String, Vec<Value>)>) -> Result<Self> {
        let n_rows = columns.first().map(|(_, v)| v.len()).unwrap_or(0);
        for (name, values) in &columns {
            if values.len() != n_rows {
                return Err(MpiError::alignment(
                    format!("demographics column '{}'", name),
                    n_rows,
                    values.len(),
                ));
            }
        }
        let (column_names, columns): (Vec<String>, Vec<Vec<Value>>) = columns.into_iter().unzip();
        check_unique(&column_names)?;

        Ok(Self {
            column_names,
            columns,
            n_rows,
        })
    }

    /// Column names.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Number of individuals.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of attributes.
    pub fn n_columns(&self) -> usize {
        self.column_names.len()
    }

    /// Get all values for a column.
    pub fn column(&self, column: &str) -> Result<&[Value]> {
        self.column_names
            .iter()
            .position(|c| c == column)
            .map(|idx| self.columns[idx].as_slice())
            .ok_or_else(|| MpiError::MissingColumn(column.to_string()))
    }

    /// Iterate over (name, values) pairs in column order.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[Value])> + '_ {
        self.column_names
            .iter()
            .zip(&self.columns)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Distinct categories of a column, in order of first occurrence.
    pub fn categories(&self, column: &str) -> Result<Vec<Value>> {
        Ok(distinct_in_order(self.column(column)?))
    }

    /// Check if a column exists.
    pub fn has_column(&self, column: &str) -> bool {
        self.column_names.iter().any(|c| c == column)
    }
}

/// Distinct values in first-occurrence order; missing values (and NaN) form one
/// category, reported as `Missing`.
pub(crate) fn distinct_in_order(values: &[Value]) -> Vec<Value> {
    let mut levels: Vec<Value> = Vec::new();
    for value in values {
        if !levels.iter().any(|l| l.same_category(value)) {
            levels.push(value.clone().normalized());
        }
    }
    levels
}
