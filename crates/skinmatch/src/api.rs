//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! skinmatch operation, whatever the UI.
//!
//! The facade:
//! - **dispatches** to the matching command function
//! - **resolves settings**: per-call overrides win over the loaded
//!   [`SkinmatchConfig`]
//! - **normalizes inputs** such as raw mask literals (`12`, `0b1100`, `0xC`)
//!
//! It holds no business logic and does no I/O of its own.
//!
//! ## Generic Over CatalogStore
//!
//! `SkinmatchApi<S: CatalogStore>` works the same over
//! [`JsonCatalog`](crate::catalog::fs::JsonCatalog) in the CLI and
//! [`InMemoryCatalog`](crate::catalog::memory::InMemoryCatalog) in tests.

use crate::bits::Mask;
use crate::catalog::{CatalogStore, TiebreakField};
use crate::commands::{self, CmdResult};
use crate::config::SkinmatchConfig;
use crate::engine::MatchPolicy;
use crate::error::{Result, SkinmatchError};

/// Per-call overrides for [`SkinmatchApi::search`]. `None` falls back to the
/// config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub policy: Option<MatchPolicy>,
    pub tiebreak: Option<TiebreakField>,
    pub limit: Option<usize>,
}

pub struct SkinmatchApi<S: CatalogStore> {
    store: S,
    config: SkinmatchConfig,
}

impl<S: CatalogStore> SkinmatchApi<S> {
    pub fn new(store: S, config: SkinmatchConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SkinmatchConfig {
        &self.config
    }

    pub fn search<N: AsRef<str>>(&self, names: &[N], options: SearchOptions) -> Result<CmdResult> {
        let params = commands::search::SearchParams {
            policy: options.policy.unwrap_or(self.config.default_policy),
            tiebreak: options.tiebreak.unwrap_or(self.config.tiebreak),
            unknown_names: self.config.unknown_names,
            limit: options.limit.or(self.config.max_results),
        };
        commands::search::run(&self.store, names, &params)
    }

    pub fn preview<N: AsRef<str>>(
        &self,
        names: &[N],
        policy: Option<MatchPolicy>,
    ) -> Result<CmdResult> {
        commands::preview::run(
            &self.store,
            names,
            policy.unwrap_or(self.config.default_policy),
            self.config.unknown_names,
        )
    }

    pub fn decode(&self, mask: &str) -> Result<CmdResult> {
        commands::chips::decode(&self.store, parse_mask(mask)?)
    }

    pub fn attributes(&self) -> Result<CmdResult> {
        commands::chips::list(&self.store)
    }

    pub fn set_stock(&mut self, id: &str, stock: u32) -> Result<CmdResult> {
        commands::stock::set_stock(&mut self.store, id, stock)
    }

    pub fn set_price(&mut self, id: &str, price_cents: u64) -> Result<CmdResult> {
        commands::stock::set_price(&mut self.store, id, price_cents)
    }
}

/// Parse a mask literal: decimal, `0b` binary, or `0x` hex.
pub fn parse_mask(input: &str) -> Result<Mask> {
    let trimmed = input.trim().replace('_', "");
    let lower = trimmed.to_ascii_lowercase();
    let parsed = if let Some(bits) = lower.strip_prefix("0b") {
        Mask::from_str_radix(bits, 2)
    } else if let Some(hex) = lower.strip_prefix("0x") {
        Mask::from_str_radix(hex, 16)
    } else {
        lower.parse::<Mask>()
    };
    parsed.map_err(|e| SkinmatchError::Api(format!("Invalid mask '{}': {}", input, e)))
}
