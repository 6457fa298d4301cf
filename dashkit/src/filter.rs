// dashkit/src/filter.rs
//
// Marketplace catalog filtering. Recomputed synchronously on every
// keystroke / category change: no ranking, no pagination, no debouncing.

use crate::errors::DashError;
use crate::types::MarketplaceListing;

/// Category selector sentinel meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Predicate for a single listing: the lowercased search term must be a
/// substring of the lowercased name OR description, and the category must
/// match exactly unless the selector is [`ALL_CATEGORIES`].
pub fn listing_matches(listing: &MarketplaceListing, search: &str, category: &str) -> bool {
    let term = search.to_lowercase();
    let text_match = listing.name.to_lowercase().contains(&term)
        || listing.description.to_lowercase().contains(&term);
    let category_match = category == ALL_CATEGORIES || listing.category == category;
    text_match && category_match
}

/// Filter the catalog down to the listings satisfying [`listing_matches`].
/// Order-preserving; idempotent for identical inputs.
pub fn filter_listings(
    listings: &[MarketplaceListing],
    search: &str,
    category: &str,
) -> Vec<MarketplaceListing> {
    listings
        .iter()
        .filter(|l| listing_matches(l, search, category))
        .cloned()
        .collect()
}

/// Flip the `is_added` flag of the listing with the given id, leaving every
/// other record untouched. Returns the new flag value.
pub fn toggle_added(listings: &mut [MarketplaceListing], id: &str) -> Result<bool, DashError> {
    match listings.iter_mut().find(|l| l.id == id) {
        Some(listing) => {
            listing.is_added = !listing.is_added;
            Ok(listing.is_added)
        }
        None => Err(DashError::UnknownEntity { id: id.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<MarketplaceListing> {
        vec![
            MarketplaceListing {
                id: "MKT-001".to_string(),
                name: "Bella Vista Restaurant".to_string(),
                description: "Authentic Italian dining downtown".to_string(),
                category: "Restaurant".to_string(),
                is_added: false,
            },
            MarketplaceListing {
                id: "MKT-002".to_string(),
                name: "Tech Solutions Pro".to_string(),
                description: "Managed IT for small business".to_string(),
                category: "Technology".to_string(),
                is_added: true,
            },
            MarketplaceListing {
                id: "MKT-003".to_string(),
                name: "Sunrise Yoga Studio".to_string(),
                description: "Morning flow and hot yoga classes".to_string(),
                category: "Fitness".to_string(),
                is_added: false,
            },
        ]
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let result = filter_listings(&catalog(), "tech", ALL_CATEGORIES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Tech Solutions Pro");
    }

    #[test]
    fn search_matches_description_too() {
        let result = filter_listings(&catalog(), "italian", ALL_CATEGORIES);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bella Vista Restaurant");
    }

    #[test]
    fn category_restricts_without_search() {
        let result = filter_listings(&catalog(), "", "Restaurant");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bella Vista Restaurant");
    }

    #[test]
    fn search_and_category_combine() {
        assert!(filter_listings(&catalog(), "tech", "Restaurant").is_empty());
        let result = filter_listings(&catalog(), "yoga", "Fitness");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn empty_search_with_all_returns_everything_in_order() {
        let result = filter_listings(&catalog(), "", ALL_CATEGORIES);
        assert_eq!(result, catalog());
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_listings(&catalog(), "o", ALL_CATEGORIES);
        let twice = filter_listings(&once, "o", ALL_CATEGORIES);
        assert_eq!(once, twice);
    }

    #[test]
    fn toggle_flips_only_the_matching_record() {
        let mut listings = catalog();
        let now_added = toggle_added(&mut listings, "MKT-001").unwrap();
        assert!(now_added);
        assert!(listings[0].is_added);
        // Everything else untouched
        assert!(listings[1].is_added);
        assert!(!listings[2].is_added);

        let now_added = toggle_added(&mut listings, "MKT-001").unwrap();
        assert!(!now_added);
        assert!(!listings[0].is_added);
    }

    #[test]
    fn toggle_unknown_id_is_an_error() {
        let mut listings = catalog();
        let err = toggle_added(&mut listings, "MKT-999").unwrap_err();
        assert_eq!(
            err,
            crate::errors::DashError::UnknownEntity {
                id: "MKT-999".to_string()
            }
        );
        assert_eq!(listings, catalog());
    }
}
