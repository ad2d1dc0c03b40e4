//! Pipeline runner chaining identification, aggregation and subgroup analysis.

use super::{MpiResult, SubgroupAnalysis};
use crate::data::{AchievementMatrix, Demographics, Dimension, DimensionSet, Value};
use crate::deprivation::{deprivation_matrix, weighted_deprivation_matrix};
use crate::error::{MpiError, Result};
use crate::index::{dimension_breakdown, mpi_summary};
use crate::score::{censor, deprivation_scores, validate_poverty_cutoff};
use crate::subgroup::{subgroup_products, subgroup_shares};
use serde::{Deserialize, Serialize};

/// Pipeline configuration for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MpiConfig {
    /// Name of the pipeline.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Poverty cutoff k.
    pub poverty_cutoff: f64,
    /// Cutoff and weight per dimension.
    pub dimensions: Vec<Dimension>,
}

impl MpiConfig {
    /// Load from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(MpiError::from)
    }

    /// Save to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(MpiError::from)
    }
}

/// Builder for constructing and running an Alkire-Foster pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    poverty_cutoff: Option<f64>,
    dimensions: Vec<Dimension>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            name: "unnamed".to_string(),
            poverty_cutoff: None,
            dimensions: Vec::new(),
        }
    }

    /// Create from a config.
    pub fn from_config(config: &MpiConfig) -> Self {
        Self {
            name: config.name.clone(),
            poverty_cutoff: Some(config.poverty_cutoff),
            dimensions: config.dimensions.clone(),
        }
    }

    /// Set the pipeline name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the poverty cutoff k.
    pub fn poverty_cutoff(mut self, k: f64) -> Self {
        self.poverty_cutoff = Some(k);
        self
    }

    /// Add a dimension with its deprivation cutoff and weight.
    pub fn dimension(mut self, name: &str, cutoff: impl Into<Value>, weight: f64) -> Self {
        self.dimensions.push(Dimension::new(name, cutoff, weight));
        self
    }

    /// Replace all dimensions.
    pub fn dimensions(mut self, dimensions: &DimensionSet) -> Self {
        self.dimensions = dimensions.iter().cloned().collect();
        self
    }

    /// Convert to config for serialization.
    pub fn to_config(&self, description: Option<&str>) -> Result<MpiConfig> {
        let poverty_cutoff = self.poverty_cutoff.ok_or_else(|| {
            MpiError::Pipeline("Poverty cutoff must be set before exporting config".to_string())
        })?;
        Ok(MpiConfig {
            name: self.name.clone(),
            description: description.map(String::from),
            poverty_cutoff,
            dimensions: self.dimensions.clone(),
        })
    }

    /// Run the pipeline without subgroup analysis.
    pub fn run(&self, achievements: &AchievementMatrix) -> Result<MpiResult> {
        self.execute(achievements, None)
    }

    /// Run the pipeline including subgroup shares and products.
    ///
    /// When nobody is poor, the result carries no subgroup analysis rather
    /// than failing.
    pub fn run_with_demographics(
        &self,
        achievements: &AchievementMatrix,
        demographics: &Demographics,
    ) -> Result<MpiResult> {
        self.execute(achievements, Some(demographics))
    }

    fn execute(
        &self,
        achievements: &AchievementMatrix,
        demographics: Option<&Demographics>,
    ) -> Result<MpiResult> {
        let k = self.poverty_cutoff.ok_or_else(|| {
            MpiError::Pipeline("Poverty cutoff k has not been set".to_string())
        })?;
        stage("validate", validate_poverty_cutoff(k))?;
        let dimensions = stage("dimensions", DimensionSet::new(self.dimensions.clone()))?;

        if let Some(demo) = demographics {
            if demo.n_rows() != achievements.n_individuals() {
                return Err(MpiError::alignment(
                    "demographics rows vs achievement rows",
                    achievements.n_individuals(),
                    demo.n_rows(),
                ));
            }
        }

        tracing::info!(
            pipeline = %self.name,
            individuals = achievements.n_individuals(),
            dimensions = achievements.n_dimensions(),
            k,
            "running Alkire-Foster pipeline"
        );

        let g0 = stage("deprivation", deprivation_matrix(achievements, &dimensions))?;
        let weighted = stage("weighting", weighted_deprivation_matrix(&g0, &dimensions))?;
        let scores = deprivation_scores(&weighted);
        let censored = censor(&scores, k);
        tracing::debug!(poor = censored.n_poor(), "censored deprivation scores");

        let summary = stage("indices", mpi_summary(&censored, achievements.n_dimensions()))?;
        let breakdown = stage("breakdown", dimension_breakdown(&g0, &weighted, &censored))?;

        let subgroups = match demographics {
            Some(demo) if summary.has_poor() => {
                let shares = stage("subgroups", subgroup_shares(demo, &censored))?;
                let products = subgroup_products(&shares);
                Some(SubgroupAnalysis { shares, products })
            }
            Some(_) => {
                tracing::debug!("no poor individuals; skipping subgroup analysis");
                None
            }
            None => None,
        };

        Ok(MpiResult {
            name: self.name.clone(),
            dimension_names: g0.dimension_names().to_vec(),
            deprivation_matrix: g0.to_rows(),
            weighted_matrix: weighted.to_rows(),
            unobserved_cutoffs: g0.unobserved_cutoffs().to_vec(),
            scores,
            censored,
            summary,
            dimensions: breakdown,
            subgroups,
        })
    }
}

/// Domain errors pass through untouched; anything else is tagged with the stage name.
fn stage<T>(name: &str, result: Result<T>) -> Result<T> {
    result.map_err(|e| {
        if e.is_domain() {
            e
        } else {
            MpiError::Pipeline(format!("Stage {} failed: {}", name, e))
        }
    })
}

/// Convenience function to run the full Alkire-Foster method.
pub fn run_af(
    achievements: &AchievementMatrix,
    dimensions: &DimensionSet,
    poverty_cutoff: f64,
    demographics: Option<&Demographics>,
) -> Result<MpiResult> {
    let pipeline = Pipeline::new()
        .name("Alkire-Foster")
        .poverty_cutoff(poverty_cutoff)
        .dimensions(dimensions);
    match demographics {
        Some(demo) => pipeline.run_with_demographics(achievements, demo),
        None => pipeline.run(achievements),
    }
}
