//! Data structures for multidimensional poverty measurement.

mod achievement;
mod demographics;
mod dimension;
mod value;

pub use achievement::AchievementMatrix;
pub use demographics::Demographics;
pub(crate) use demographics::distinct_in_order;
pub use dimension::{AlignedDimensions, Dimension, DimensionSet};
pub use value::Value;
