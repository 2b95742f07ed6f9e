//! # Configuration
//!
//! Skinmatch configuration is loaded with [`confique`], layering environment
//! variables, TOML files, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `SKINMATCH_DEFAULT_POLICY`, `SKINMATCH_TIEBREAK`, etc.
//! 2. **Config files**: in the order passed to [`SkinmatchConfig::load`]; the
//!    CLI passes `--config` first, then `skinmatch.toml` in the platform
//!    config directory.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_policy` | `empty_query_returns_all` | Inclusion rule when the caller does not pick one |
//! | `unknown_names` | `ignore` | `ignore` or `reject` unknown attribute names in queries |
//! | `tiebreak` | `stock` | `stock`, `rating`, `price`, or `catalog` |
//! | `max_results` | unset | Truncate search results to this many items |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::catalog::TiebreakField;
use crate::engine::MatchPolicy;
use crate::error::Result;
use crate::query::UnknownNamePolicy;

pub const CONFIG_FILENAME: &str = "skinmatch.toml";

/// Configuration for skinmatch, stored in `skinmatch.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkinmatchConfig {
    /// Inclusion rule used when a search does not name one:
    /// "any_overlap", "empty_query_returns_all", or "full_coverage".
    #[config(default = "empty_query_returns_all", env = "SKINMATCH_DEFAULT_POLICY")]
    pub default_policy: MatchPolicy,

    /// What to do with query names missing from the attribute space:
    /// "ignore" or "reject".
    #[config(default = "ignore", env = "SKINMATCH_UNKNOWN_NAMES")]
    pub unknown_names: UnknownNamePolicy,

    /// Field ordering equally ranked items: "stock", "rating", "price", or "catalog".
    #[config(default = "stock", env = "SKINMATCH_TIEBREAK")]
    pub tiebreak: TiebreakField,

    /// Maximum number of items a search returns. Unset means no limit.
    #[config(env = "SKINMATCH_MAX_RESULTS")]
    pub max_results: Option<usize>,
}

impl Default for SkinmatchConfig {
    fn default() -> Self {
        Self {
            default_policy: MatchPolicy::EmptyQueryReturnsAll,
            unknown_names: UnknownNamePolicy::Ignore,
            tiebreak: TiebreakField::Stock,
            max_results: None,
        }
    }
}

impl SkinmatchConfig {
    /// Load from the environment and `files`, earlier files winning.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        Ok(builder.load()?)
    }

    /// A commented `skinmatch.toml` listing every setting.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
