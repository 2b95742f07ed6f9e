//! # Domain Adapters
//!
//! The storefront matches several unrelated kinds of things against bit
//! masks. Each one is a thin adapter over the generic [`engine`](crate::engine):
//! a fixed attribute list, bit constants that agree with it, an entity type
//! implementing [`Tagged`](crate::engine::Tagged), and a tiebreak.
//!
//! | Module | Attributes | Entity | Tiebreak |
//! |--------|------------|--------|----------|
//! | [`skin`] | skin concerns | [`skin::Product`] | stock, descending |
//! | [`ingredients`] | ingredient functions | [`ingredients::Ingredient`] | potency, descending |
//! | [`tiers`] | partner tiers | [`tiers::DropshipperProfile`] | rating, descending |
//! | [`access`] | permissions | [`access::Session`] | none (full coverage checks) |

pub mod access;
pub mod ingredients;
pub mod skin;
pub mod tiers;
