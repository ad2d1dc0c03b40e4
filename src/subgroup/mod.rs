//! Subgroup analysis: poor-population shares by demographic category and
//! their cross-attribute products.

mod products;
mod shares;

pub use products::{subgroup_products, AttributePair, ProductEntry, SubgroupProducts};
pub use shares::{subgroup_shares, CategoryShare, SubgroupShares};
