//! Deprivation identification: raw achievements to (weighted) 0/1 indicators.

mod matrix;
mod weighted;

pub use matrix::{deprivation_matrix, DeprivationMatrix};
pub use weighted::{weighted_deprivation_matrix, WeightedDeprivationMatrix};
