//! Admin console permission masks.
//!
//! Permissions use full coverage: a session may perform an action only when
//! it holds every bit the action requires.

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeSpace;
use crate::bits::{Mask, covers_all};
use crate::engine::tiebreak::catalog_order;
use crate::engine::{MatchPolicy, Tagged, filter_and_rank};
use crate::error::ConfigurationError;

pub const PERMISSIONS: [&str; 6] = [
    "VIEW_CATALOG",
    "EDIT_PRICES",
    "MANAGE_STOCK",
    "DISPATCH_ORDERS",
    "VIEW_REPORTS",
    "MANAGE_USERS",
];

pub const VIEW_CATALOG: Mask = 1 << 0;
pub const EDIT_PRICES: Mask = 1 << 1;
pub const MANAGE_STOCK: Mask = 1 << 2;
pub const DISPATCH_ORDERS: Mask = 1 << 3;
pub const VIEW_REPORTS: Mask = 1 << 4;
pub const MANAGE_USERS: Mask = 1 << 5;

pub fn space() -> Result<AttributeSpace, ConfigurationError> {
    AttributeSpace::define(PERMISSIONS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Viewer,
    Dropshipper,
    Manager,
    Admin,
}

impl Role {
    pub fn permissions(self) -> Mask {
        match self {
            Role::Viewer => VIEW_CATALOG,
            Role::Dropshipper => VIEW_CATALOG | DISPATCH_ORDERS,
            Role::Manager => VIEW_CATALOG | EDIT_PRICES | MANAGE_STOCK | VIEW_REPORTS,
            Role::Admin => {
                VIEW_CATALOG
                    | EDIT_PRICES
                    | MANAGE_STOCK
                    | DISPATCH_ORDERS
                    | VIEW_REPORTS
                    | MANAGE_USERS
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user: String,
    pub permissions: Mask,
}

impl Session {
    pub fn for_role(id: impl Into<String>, user: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            user: user.into(),
            permissions: role.permissions(),
        }
    }
}

impl Tagged for Session {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute_mask(&self) -> Mask {
        self.permissions
    }
}

/// Whether `session` holds every permission in `required`.
pub fn can(session: &Session, required: Mask) -> bool {
    covers_all(session.permissions, required)
}

/// Sessions allowed to perform an action requiring `required`, narrowest
/// grant first.
pub fn sessions_with(sessions: &[Session], required: Mask) -> Vec<&Session> {
    filter_and_rank(sessions, required, MatchPolicy::FullCoverage, catalog_order())
}
