//! Ingredient discovery by function.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSpace;
use crate::bits::Mask;
use crate::engine::tiebreak::descending_by;
use crate::engine::{MatchPolicy, Tagged, filter_and_rank};
use crate::error::ConfigurationError;

pub const FUNCTIONS: [&str; 8] = [
    "HYDRATING",
    "EXFOLIATING",
    "BRIGHTENING",
    "SOOTHING",
    "ANTIOXIDANT",
    "BARRIER_REPAIR",
    "SEBUM_CONTROL",
    "ANTI_INFLAMMATORY",
];

pub const HYDRATING: Mask = 1 << 0;
pub const EXFOLIATING: Mask = 1 << 1;
pub const BRIGHTENING: Mask = 1 << 2;
pub const SOOTHING: Mask = 1 << 3;
pub const ANTIOXIDANT: Mask = 1 << 4;
pub const BARRIER_REPAIR: Mask = 1 << 5;
pub const SEBUM_CONTROL: Mask = 1 << 6;
pub const ANTI_INFLAMMATORY: Mask = 1 << 7;

pub fn space() -> Result<AttributeSpace, ConfigurationError> {
    AttributeSpace::define(FUNCTIONS)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub inci_name: String,
    pub functions: Mask,
    /// Efficacy score in `[0, 1]`.
    pub potency: f32,
}

impl Tagged for Ingredient {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute_mask(&self) -> Mask {
        self.functions
    }
}

pub fn by_potency() -> impl FnMut(&Ingredient, &Ingredient) -> Ordering {
    descending_by(|i: &Ingredient| i.potency)
}

/// Ingredients serving any of the requested functions, most targeted first.
pub fn discover(ingredients: &[Ingredient], functions: Mask) -> Vec<&Ingredient> {
    filter_and_rank(ingredients, functions, MatchPolicy::AnyOverlap, by_potency())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: &str, functions: Mask, potency: f32) -> Ingredient {
        Ingredient {
            id: id.into(),
            inci_name: id.into(),
            functions,
            potency,
        }
    }

    #[test]
    fn constants_agree_with_space() {
        let space = space().unwrap();
        assert_eq!(space.bit("HYDRATING"), Some(HYDRATING));
        assert_eq!(space.bit("BARRIER_REPAIR"), Some(BARRIER_REPAIR));
        assert_eq!(space.bit("ANTI_INFLAMMATORY"), Some(ANTI_INFLAMMATORY));
        assert_eq!(space.full_mask(), 0xFF);
    }

    #[test]
    fn discover_ranks_by_coverage_then_potency() {
        let ingredients = vec![
            ingredient("glycerin", HYDRATING, 0.6),
            ingredient("niacinamide", BRIGHTENING | SEBUM_CONTROL | BARRIER_REPAIR, 0.9),
            ingredient("centella", SOOTHING | ANTI_INFLAMMATORY, 0.8),
            ingredient("hyaluronic-acid", HYDRATING, 0.95),
            ingredient("ceramide-np", HYDRATING | BARRIER_REPAIR, 0.7),
        ];
        let ranked = discover(&ingredients, HYDRATING | BARRIER_REPAIR);
        let ids: Vec<&str> = ranked.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["ceramide-np", "hyaluronic-acid", "niacinamide", "glycerin"]
        );
    }

    #[test]
    fn discover_orders_potency_with_missing_scores() {
        let ingredients: Vec<Ingredient> = (0..64)
            .map(|i| {
                let potency = if i % 3 == 0 { f32::NAN } else { (i % 10) as f32 / 10.0 };
                ingredient(&format!("i{i}"), HYDRATING, potency)
            })
            .collect();
        let ranked = discover(&ingredients, HYDRATING);
        assert_eq!(ranked.len(), 64);

        let scored = ranked.iter().take_while(|i| !i.potency.is_nan()).count();
        assert_eq!(scored, 42);
        assert!(ranked[..scored].windows(2).all(|w| w[0].potency >= w[1].potency));
        assert!(ranked[scored..].iter().all(|i| i.potency.is_nan()));
    }
}
