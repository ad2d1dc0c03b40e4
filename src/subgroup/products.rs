//! Cross-attribute products of subgroup shares.
//!
//! For two attributes the product of their category shares is the joint
//! share expected if the attributes were independent among the poor. It is a
//! co-occurrence estimate, not a measured joint distribution.

use super::SubgroupShares;
use crate::data::Value;
use serde::{Deserialize, Serialize};

/// One category combination of an attribute pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    /// `"<first category>-<second category>"`.
    pub label: String,
    pub first_category: Value,
    pub second_category: Value,
    /// Product of the two shares.
    pub product: f64,
}

/// All category combinations for a pair of distinct attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributePair {
    /// `"<first attribute>-<second attribute>"`.
    pub key: String,
    pub first: String,
    pub second: String,
    pub entries: Vec<ProductEntry>,
}

impl AttributePair {
    /// Product for a category label such as `"N-M"`.
    pub fn product(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.product)
    }
}

/// Products keyed by attribute pair, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubgroupProducts {
    pairs: Vec<AttributePair>,
}

impl SubgroupProducts {
    /// Look up a pair by key, e.g. `"region-gender"`.
    pub fn get(&self, key: &str) -> Option<&AttributePair> {
        self.pairs.iter().find(|p| p.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.pairs.iter().map(|p| p.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributePair> + '_ {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Multiply the shares of every category pair across every pair of distinct attributes.
///
/// Attribute pairs are visited as (a, b) with a before b in input order, and
/// categories in their stored order, so the first-listed attribute names the
/// key's left side. Pairs within the same attribute are never formed. Work is
/// O(P²) in the total number of (attribute, category) entries P, which is
/// small for survey demographics.
///
/// Attribute names are expected to be unique, as [`subgroup_shares`] produces
/// them from a [`Demographics`](crate::data::Demographics) table. A repeated
/// name is never crossed with itself and its entries are appended to the
/// existing key in attribute-pair order.
///
/// [`subgroup_shares`]: super::subgroup_shares
pub fn subgroup_products(shares: &[SubgroupShares]) -> SubgroupProducts {
    let mut pairs: Vec<AttributePair> = Vec::new();

    for (i, first) in shares.iter().enumerate() {
        for second in &shares[i + 1..] {
            // Same-named attributes are never crossed.
            if first.attribute == second.attribute {
                continue;
            }

            let entries = first
                .categories
                .iter()
                .flat_map(|a| {
                    second.categories.iter().map(move |b| ProductEntry {
                        label: format!("{}-{}", a.category, b.category),
                        first_category: a.category.clone(),
                        second_category: b.category.clone(),
                        product: a.share * b.share,
                    })
                })
                .collect::<Vec<_>>();

            let key = format!("{}-{}", first.attribute, second.attribute);
            match pairs.iter().position(|p| p.key == key) {
                Some(idx) => pairs[idx].entries.extend(entries),
                None => pairs.push(AttributePair {
                    key,
                    first: first.attribute.clone(),
                    second: second.attribute.clone(),
                    entries,
                }),
            }
        }
    }

    SubgroupProducts { pairs }
}
