// services/admin-dash/src/mock.rs
//
// LocalDeals Admin - Mock Data
// Hardcoded sample records for UI development and demos. Fabricated per
// render; nothing here survives a reload.
//

use dashkit::types::{
    Business, Distributor, EntityStatus, LocationRecord, MarketplaceListing, Partner, UserRecord,
};

/// Categories offered in the marketplace filter dropdown.
pub const CATEGORIES: &[&str] = &[
    "Restaurant",
    "Technology",
    "Fitness",
    "Beauty",
    "Food & Drink",
];

/// Active directory businesses
pub fn sample_businesses() -> Vec<Business> {
    vec![
        Business {
            id: "BUS-001".to_string(),
            name: "Bella Vista Restaurant".to_string(),
            owner: "Maria Rossi".to_string(),
            category: "Restaurant".to_string(),
            status: EntityStatus::Active,
            plan: "Premium".to_string(),
            approved_on: "2024-03-12".to_string(),
        },
        Business {
            id: "BUS-002".to_string(),
            name: "Tech Solutions Pro".to_string(),
            owner: "Dev Patel".to_string(),
            category: "Technology".to_string(),
            status: EntityStatus::Active,
            plan: "Standard".to_string(),
            approved_on: "2024-05-02".to_string(),
        },
        Business {
            id: "BUS-003".to_string(),
            name: "Sunrise Yoga Studio".to_string(),
            owner: "Anna Kim".to_string(),
            category: "Fitness".to_string(),
            status: EntityStatus::Active,
            plan: "Premium".to_string(),
            approved_on: "2024-06-21".to_string(),
        },
        Business {
            id: "BUS-004".to_string(),
            name: "The Corner Bakery".to_string(),
            owner: "James Okafor".to_string(),
            category: "Food & Drink".to_string(),
            status: EntityStatus::Suspended,
            plan: "Standard".to_string(),
            approved_on: "2023-11-08".to_string(),
        },
    ]
}

/// Businesses waiting in the approval queue
pub fn sample_pending_businesses() -> Vec<Business> {
    vec![
        Business {
            id: "BUS-005".to_string(),
            name: "Glow Beauty Lounge".to_string(),
            owner: "Sofia Marquez".to_string(),
            category: "Beauty".to_string(),
            status: EntityStatus::Pending,
            plan: "Standard".to_string(),
            approved_on: String::new(),
        },
        Business {
            id: "BUS-006".to_string(),
            name: "Harbor Seafood Grill".to_string(),
            owner: "Tom Nguyen".to_string(),
            category: "Restaurant".to_string(),
            status: EntityStatus::Pending,
            plan: "Premium".to_string(),
            approved_on: String::new(),
        },
    ]
}

pub fn sample_distributors() -> Vec<Distributor> {
    vec![
        Distributor {
            id: "DIS-001".to_string(),
            name: "Metro Deals Network".to_string(),
            contact: "Laura Chen".to_string(),
            member_count: 1_240,
            status: EntityStatus::Active,
        },
        Distributor {
            id: "DIS-002".to_string(),
            name: "Coastal Coupon Co".to_string(),
            contact: "Mike Davis".to_string(),
            member_count: 530,
            status: EntityStatus::Active,
        },
        Distributor {
            id: "DIS-003".to_string(),
            name: "Valley Savings Group".to_string(),
            contact: "Priya Shah".to_string(),
            member_count: 87,
            status: EntityStatus::Pending,
        },
    ]
}

pub fn sample_locations() -> Vec<LocationRecord> {
    vec![
        LocationRecord {
            id: "LOC-001".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            business_count: 142,
            deal_count: 389,
            monthly_revenue: 48_200.0,
            growth_rate: 12.4,
        },
        LocationRecord {
            id: "LOC-002".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            business_count: 97,
            deal_count: 255,
            monthly_revenue: 31_750.0,
            growth_rate: 8.1,
        },
        LocationRecord {
            id: "LOC-003".to_string(),
            city: "Raleigh".to_string(),
            state: "NC".to_string(),
            business_count: 64,
            deal_count: 170,
            monthly_revenue: 19_480.0,
            growth_rate: 15.9,
        },
    ]
}

pub fn sample_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: "USR-001".to_string(),
            name: "Sarah Mitchell".to_string(),
            email: "sarah.mitchell@example.com".to_string(),
            joined_on: "2024-01-17".to_string(),
            saved_deals: 23,
        },
        UserRecord {
            id: "USR-002".to_string(),
            name: "Carlos Vega".to_string(),
            email: "carlos.vega@example.com".to_string(),
            joined_on: "2024-04-03".to_string(),
            saved_deals: 8,
        },
        UserRecord {
            id: "USR-003".to_string(),
            name: "Emma Larsen".to_string(),
            email: "emma.larsen@example.com".to_string(),
            joined_on: "2023-09-28".to_string(),
            saved_deals: 51,
        },
    ]
}

pub fn sample_partners() -> Vec<Partner> {
    vec![
        Partner {
            id: "PTR-001".to_string(),
            name: "Rose City Perks".to_string(),
            domain: "rosecityperks.com".to_string(),
            status: EntityStatus::Active,
            business_count: 58,
        },
        Partner {
            id: "PTR-002".to_string(),
            name: "Hill Country Deals".to_string(),
            domain: "hillcountrydeals.com".to_string(),
            status: EntityStatus::Active,
            business_count: 34,
        },
        Partner {
            id: "PTR-003".to_string(),
            name: "Triangle Local".to_string(),
            domain: "trianglelocal.com".to_string(),
            status: EntityStatus::Pending,
            business_count: 0,
        },
    ]
}

/// Marketplace catalog of opt-in premium businesses
pub fn sample_listings() -> Vec<MarketplaceListing> {
    vec![
        MarketplaceListing {
            id: "MKT-001".to_string(),
            name: "Bella Vista Restaurant".to_string(),
            description: "Authentic Italian dining downtown".to_string(),
            category: "Restaurant".to_string(),
            is_added: true,
        },
        MarketplaceListing {
            id: "MKT-002".to_string(),
            name: "Tech Solutions Pro".to_string(),
            description: "Managed IT for small business".to_string(),
            category: "Technology".to_string(),
            is_added: false,
        },
        MarketplaceListing {
            id: "MKT-003".to_string(),
            name: "Sunrise Yoga Studio".to_string(),
            description: "Morning flow and hot yoga classes".to_string(),
            category: "Fitness".to_string(),
            is_added: false,
        },
        MarketplaceListing {
            id: "MKT-004".to_string(),
            name: "Glow Beauty Lounge".to_string(),
            description: "Skincare, nails and lash studio".to_string(),
            category: "Beauty".to_string(),
            is_added: false,
        },
        MarketplaceListing {
            id: "MKT-005".to_string(),
            name: "The Corner Bakery".to_string(),
            description: "Fresh sourdough and espresso bar".to_string(),
            category: "Food & Drink".to_string(),
            is_added: true,
        },
    ]
}
