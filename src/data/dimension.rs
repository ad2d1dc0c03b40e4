//! Dimension definitions: the deprivation cutoff and weight for each dimension.
//!
//! Cutoffs and weights are keyed by dimension name and resolved against an
//! achievement matrix's column list, so a reordered table can never silently
//! apply one dimension's cutoff to another.

use super::achievement::check_unique;
use super::{AchievementMatrix, Value};
use crate::error::{MpiError, Result};
use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Cutoff and weight for a single dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Dimension name, matching an achievement matrix column.
    pub name: String,
    /// Achievement value that marks an individual as deprived.
    pub cutoff: Value,
    /// Relative importance of the dimension.
    pub weight: f64,
}

impl Dimension {
    pub fn new(name: &str, cutoff: impl Into<Value>, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            cutoff: cutoff.into(),
            weight,
        }
    }
}

/// A validated set of dimensions with unique names and usable weights.
///
/// Deserialization goes through [`DimensionSet::new`], so a set read from
/// YAML or JSON is checked the same way as one built in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Dimension>", into = "Vec<Dimension>")]
pub struct DimensionSet {
    dimensions: Vec<Dimension>,
}

impl TryFrom<Vec<Dimension>> for DimensionSet {
    type Error = MpiError;

    fn try_from(dimensions: Vec<Dimension>) -> Result<Self> {
        Self::new(dimensions)
    }
}

impl From<DimensionSet> for Vec<Dimension> {
    fn from(set: DimensionSet) -> Self {
        set.dimensions
    }
}

/// Cutoffs and weights resolved into a specific column order.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedDimensions {
    pub names: Vec<String>,
    pub cutoffs: Vec<Value>,
    pub weights: Vec<f64>,
}

impl DimensionSet {
    /// Create a dimension set, rejecting duplicate names and invalid weights.
    pub fn new(dimensions: Vec<Dimension>) -> Result<Self> {
        let names: Vec<String> = dimensions.iter().map(|d| d.name.clone()).collect();
        check_unique(&names)?;

        for dim in &dimensions {
            if !dim.weight.is_finite() || dim.weight < 0.0 {
                return Err(MpiError::InvalidParameter(format!(
                    "Weight for dimension '{}' must be finite and non-negative, got {}",
                    dim.name, dim.weight
                )));
            }
        }

        let set = Self { dimensions };
        let sum = set.weight_sum();
        if !set.is_empty() && (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            tracing::warn!(
                weight_sum = sum,
                "dimension weights do not sum to 1; H, A and M0 are not proper percentages"
            );
        }
        Ok(set)
    }

    /// Build from positionally aligned cutoff and weight tables.
    ///
    /// Row `i` of each table belongs to `names[i]`. All three must have the
    /// same length.
    pub fn from_positional(names: &[String], cutoffs: Vec<Value>, weights: &[f64]) -> Result<Self> {
        if cutoffs.len() != names.len() {
            return Err(MpiError::alignment(
                "cutoff table rows vs dimensions",
                names.len(),
                cutoffs.len(),
            ));
        }
        if weights.len() != names.len() {
            return Err(MpiError::alignment(
                "weight table rows vs dimensions",
                names.len(),
                weights.len(),
            ));
        }

        let dimensions = names
            .iter()
            .zip(cutoffs)
            .zip(weights)
            .map(|((name, cutoff), &weight)| Dimension {
                name: name.clone(),
                cutoff,
                weight,
            })
            .collect();
        Self::new(dimensions)
    }

    /// Look up a dimension by name.
    pub fn get(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dimension> + '_ {
        self.dimensions.iter()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Sum of all weights.
    pub fn weight_sum(&self) -> f64 {
        self.dimensions.iter().map(|d| d.weight).sum()
    }

    /// Resolve cutoffs and weights into the given column order.
    ///
    /// Every column must have exactly one entry and every entry must name a column.
    pub fn align_names(&self, columns: &[String]) -> Result<AlignedDimensions> {
        let mut cutoffs = Vec::with_capacity(columns.len());
        let mut weights = Vec::with_capacity(columns.len());
        for column in columns {
            let dim = self
                .get(column)
                .ok_or_else(|| MpiError::MissingDimension(column.clone()))?;
            cutoffs.push(dim.cutoff.clone());
            weights.push(dim.weight);
        }

        if let Some(extra) = self.dimensions.iter().find(|d| !columns.contains(&d.name)) {
            return Err(MpiError::UnknownDimension(extra.name.clone()));
        }
        if self.len() != columns.len() {
            return Err(MpiError::alignment(
                "dimension entries vs columns",
                columns.len(),
                self.len(),
            ));
        }

        Ok(AlignedDimensions {
            names: columns.to_vec(),
            cutoffs,
            weights,
        })
    }

    /// Resolve against an achievement matrix's columns.
    pub fn align_to(&self, achievements: &AchievementMatrix) -> Result<AlignedDimensions> {
        self.align_names(achievements.dimension_names())
    }
}
