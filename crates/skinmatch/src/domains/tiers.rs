//! Dropshipper segmentation by partner tier.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSpace;
use crate::bits::Mask;
use crate::engine::tiebreak::descending_by;
use crate::engine::{MatchPolicy, Tagged, filter_and_rank};
use crate::error::ConfigurationError;

pub const TIERS: [&str; 4] = ["BRONZE", "SILVER", "GOLD", "PLATINUM"];

pub const BRONZE: Mask = 1 << 0;
pub const SILVER: Mask = 1 << 1;
pub const GOLD: Mask = 1 << 2;
pub const PLATINUM: Mask = 1 << 3;

pub fn space() -> Result<AttributeSpace, ConfigurationError> {
    AttributeSpace::define(TIERS)
}

/// Tier bits a partner qualifies for with a given monthly order volume.
///
/// Tiers are cumulative: a GOLD partner is also SILVER and BRONZE.
pub fn tiers_for_volume(monthly_orders: u32) -> Mask {
    match monthly_orders {
        0..=49 => BRONZE,
        50..=199 => BRONZE | SILVER,
        200..=999 => BRONZE | SILVER | GOLD,
        _ => BRONZE | SILVER | GOLD | PLATINUM,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropshipperProfile {
    pub id: String,
    pub store_name: String,
    pub tiers: Mask,
    pub rating: f32,
    pub monthly_orders: u32,
}

impl DropshipperProfile {
    pub fn new(
        id: impl Into<String>,
        store_name: impl Into<String>,
        rating: f32,
        monthly_orders: u32,
    ) -> Self {
        Self {
            id: id.into(),
            store_name: store_name.into(),
            tiers: tiers_for_volume(monthly_orders),
            rating,
            monthly_orders,
        }
    }
}

impl Tagged for DropshipperProfile {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute_mask(&self) -> Mask {
        self.tiers
    }
}

pub fn by_rating() -> impl FnMut(&DropshipperProfile, &DropshipperProfile) -> Ordering {
    descending_by(|p: &DropshipperProfile| p.rating)
}

/// Partners in any of the selected tiers.
pub fn segment(profiles: &[DropshipperProfile], tiers: Mask) -> Vec<&DropshipperProfile> {
    filter_and_rank(profiles, tiers, MatchPolicy::AnyOverlap, by_rating())
}
