//! Alkire-Foster indices: H, A, M0 and their breakdown by dimension.

mod breakdown;
mod ratios;

pub use breakdown::{
    censored_headcount_ratios, dimension_breakdown, dimension_contributions, DimensionBreakdown,
};
pub use ratios::{
    adjusted_headcount_ratio, average_deprivation_score, headcount_ratio, mpi_summary, MpiSummary,
};
