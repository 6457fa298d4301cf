// dashkit/src/types.rs
//
// Display records shared by the admin dashboard screens. These are plain
// presentation structs: nothing here is persisted or validated, a record
// only lives for the duration of a component render.

use serde::{Deserialize, Serialize};

/// Lifecycle status shown next to an entity name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityStatus {
    Active,
    Pending,
    Suspended,
}

impl EntityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Suspended => "Suspended",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Active => "status-active",
            Self::Pending => "status-pending",
            Self::Suspended => "status-suspended",
        }
    }
}

/// A directory business as the admin sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub category: String,
    pub status: EntityStatus,
    pub plan: String,
    pub approved_on: String,
}

/// A deal distributor (prints/ships coupon books for a region).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub member_count: u32,
    pub status: EntityStatus,
}

/// A market location rollup row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub city: String,
    pub state: String,
    pub business_count: u32,
    pub deal_count: u32,
    pub monthly_revenue: f64,
    pub growth_rate: f64,
}

/// An end user of the deals app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub joined_on: String,
    pub saved_deals: u32,
}

/// A premium business offered in the white-label marketplace catalog.
/// `is_added` tracks whether the selected partner has opted it into
/// their own directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceListing {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub is_added: bool,
}

/// A white-label partner (a partner-branded instance of the directory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub status: EntityStatus,
    pub business_count: u32,
}
