//! # Skinmatch Architecture
//!
//! Skinmatch is a **UI-agnostic matching library** for storefront catalogs:
//! products tagged with skin concerns, ingredients tagged with functions,
//! dropshipper profiles tagged with tiers, sessions tagged with permissions.
//! Every one of those is "a set of entities, each carrying a small bitmask",
//! and every one needs the same thing: filter by a query mask, then rank.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (skinmatch-cli)                                        │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, resolves config overrides     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Names → masks → engine, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Engine (engine/, bits.rs)   │ │  Catalog (catalog/)        │
//! │  - Pure filter/score/sort    │ │  - CatalogStore trait      │
//! │  - Generic over `Tagged`     │ │  - JSON file, in-memory    │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Engine Owns Nothing
//!
//! [`engine::filter_and_rank`] takes a slice, a query mask, an explicit
//! [`engine::MatchPolicy`], and a tiebreak comparator. It holds no catalog,
//! caches nothing, and never fails. Catalogs are supplied by a
//! [`catalog::CatalogStore`]; domains in [`domains`] are thin adapters that
//! only contribute an attribute list and a tiebreak.
//!
//! ## Attribute Spaces
//!
//! An [`attributes::AttributeSpace`] maps at most 32 names to single bits, in
//! definition order. It is checked once when built; after that, masks are
//! plain `u32`s and every check is a couple of bit operations.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for catalog operations
//! - [`commands`]: Search, preview, chips, and admin edits
//! - [`engine`]: Filter-and-rank, toggle previews, tiebreak helpers
//! - [`bits`]: Mask primitives
//! - [`attributes`]: Attribute space builder and name validation
//! - [`query`]: Names to masks and back
//! - [`catalog`]: Catalog model and storage
//! - [`domains`]: Skin concerns, ingredients, access control, partner tiers
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod bits;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod domains;
pub mod engine;
pub mod error;
pub mod query;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use attributes::AttributeSpace;
pub use bits::{Mask, covers_all, has_overlap, popcount, toggle_bit};
pub use engine::{MatchPolicy, MatchResult, Tagged, filter_and_rank, preview_toggle_delta};
pub use error::{ConfigurationError, Result, SkinmatchError, UnknownAttributeError};
pub use query::{UnknownNamePolicy, build_query_from_names, decode_query};
