//! Skin-concern vectors for product recommendations.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSpace;
use crate::bits::Mask;
use crate::engine::tiebreak::descending_by;
use crate::engine::{MatchPolicy, Tagged, filter_and_rank};
use crate::error::ConfigurationError;

pub const CONCERNS: [&str; 8] = [
    "ACNE",
    "DULL",
    "DRY",
    "OILY",
    "SENSITIVE",
    "AGING",
    "PIGMENTATION",
    "REDNESS",
];

pub const ACNE: Mask = 1 << 0;
pub const DULL: Mask = 1 << 1;
pub const DRY: Mask = 1 << 2;
pub const OILY: Mask = 1 << 3;
pub const SENSITIVE: Mask = 1 << 4;
pub const AGING: Mask = 1 << 5;
pub const PIGMENTATION: Mask = 1 << 6;
pub const REDNESS: Mask = 1 << 7;

pub fn space() -> Result<AttributeSpace, ConfigurationError> {
    AttributeSpace::define(CONCERNS)
}

/// A storefront product and the concerns it targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub concerns: Mask,
    pub stock: u32,
    pub price_cents: u64,
}

impl Tagged for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute_mask(&self) -> Mask {
        self.concerns
    }
}

/// Better-stocked products first, so recommendations stay shippable.
pub fn by_stock() -> impl FnMut(&Product, &Product) -> Ordering {
    descending_by(|p: &Product| p.stock)
}

/// Products for a shopper's concern vector, best match first.
pub fn recommend(products: &[Product], concerns: Mask, policy: MatchPolicy) -> Vec<&Product> {
    filter_and_rank(products, concerns, policy, by_stock())
}
