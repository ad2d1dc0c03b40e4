//! Deprivation scores and the Alkire-Foster censoring step.

mod censor;
mod scores;

pub use censor::{censor, censor_scores, validate_poverty_cutoff, CensoredScores};
pub use scores::{deprivation_scores, DeprivationScores};
