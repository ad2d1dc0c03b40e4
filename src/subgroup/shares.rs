//! Share of the poor population falling in each demographic category.

use crate::data::{distinct_in_order, Demographics, Value};
use crate::error::{MpiError, Result};
use crate::score::CensoredScores;
use serde::{Deserialize, Serialize};

/// Poverty statistics for one category of a demographic attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category value (missing values form their own category).
    pub category: Value,
    /// Individuals in the category.
    pub population: usize,
    /// Poor individuals in the category.
    pub poor: usize,
    /// `poor / total poor` across the whole population.
    pub share: f64,
}

impl CategoryShare {
    /// Headcount ratio within the category (%).
    pub fn headcount_ratio(&self) -> f64 {
        if self.population == 0 {
            return 0.0;
        }
        100.0 * self.poor as f64 / self.population as f64
    }
}

/// Category shares for one demographic attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubgroupShares {
    /// Attribute (column) name.
    pub attribute: String,
    /// Categories in order of first occurrence in the column.
    pub categories: Vec<CategoryShare>,
}

impl SubgroupShares {
    /// Share for a category, if observed.
    pub fn share(&self, category: &Value) -> Option<f64> {
        self.categories
            .iter()
            .find(|c| c.category.same_category(category))
            .map(|c| c.share)
    }

    /// Sum of shares; 1.0 up to rounding.
    pub fn total_share(&self) -> f64 {
        self.categories.iter().map(|c| c.share).sum()
    }
}

/// Compute, for every demographic attribute and every category observed in
/// it, the fraction of poor individuals belonging to that category.
///
/// Attributes are reported in column order; categories in first-occurrence
/// order within the column. Rows of `demographics` must line up with
/// `censored`. Fails with [`MpiError::NoPoorIndividuals`] when nobody is poor.
pub fn subgroup_shares(
    demographics: &Demographics,
    censored: &CensoredScores,
) -> Result<Vec<SubgroupShares>> {
    if demographics.n_rows() != censored.len() {
        return Err(MpiError::alignment(
            "demographics rows vs censored scores",
            censored.len(),
            demographics.n_rows(),
        ));
    }

    let poor_mask = censored.poor_mask();
    let total_poor = poor_mask.iter().filter(|&&p| p).count();
    if total_poor == 0 {
        return Err(MpiError::NoPoorIndividuals(
            "subgroup shares are undefined".to_string(),
        ));
    }

    Ok(demographics
        .iter_columns()
        .map(|(attribute, values)| SubgroupShares {
            attribute: attribute.to_string(),
            categories: distinct_in_order(values)
                .into_iter()
                .map(|category| {
                    let (population, poor) = values.iter().zip(&poor_mask).fold(
                        (0usize, 0usize),
                        |(pop, poor), (value, &is_poor)| {
                            if value.same_category(&category) {
                                (pop + 1, poor + usize::from(is_poor))
                            } else {
                                (pop, poor)
                            }
                        },
                    );
                    CategoryShare {
                        category,
                        population,
                        poor,
                        share: poor as f64 / total_poor as f64,
                    }
                })
                .collect(),
        })
        .collect())
}
