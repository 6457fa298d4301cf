// dashkit/src/synth.rs
//
// Synthesized detail fields. Detail screens show contact info, hours,
// subdomains, referral codes etc. that do not exist on the base record;
// they are fabricated deterministically from the entity name so a screen
// renders the same fields on every visit. None of this is authoritative.

/// Lowercase alphanumeric slug of a name ("Bella Vista Restaurant" ->
/// "bellavistarestaurant").
pub fn slug(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn contact_email(name: &str) -> String {
    format!("contact@{}.com", slug(name))
}

pub fn website(name: &str) -> String {
    format!("www.{}.com", slug(name))
}

/// White-label subdomain for a partner instance.
pub fn subdomain(name: &str) -> String {
    format!("{}.localdeals.app", slug(name))
}

/// Fabricated local phone number; the line digits come from the name bytes
/// so the number is stable across renders.
pub fn phone(name: &str) -> String {
    let sum: u32 = name.bytes().map(u32::from).sum();
    let exchange = 200 + sum % 800;
    let line = 1000 + (sum * 7) % 9000;
    format!("(555) {exchange:03}-{line:04}")
}

/// Referral code: uppercase initials of the name plus the digits of the id.
pub fn referral_code(name: &str, id: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("{initials}-{digits}")
}

/// Billing account reference derived from the entity id.
pub fn billing_account(id: &str) -> String {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("ACCT-{digits:0>6}")
}

const HOURS: &[&str] = &[
    "Mon-Fri 9am-6pm, Sat 10am-4pm",
    "Mon-Sat 8am-8pm",
    "Daily 7am-10pm",
    "Tue-Sun 11am-9pm",
];

const AMENITIES: &[&[&str]] = &[
    &["Free Wi-Fi", "Parking", "Wheelchair Access"],
    &["Outdoor Seating", "Pet Friendly", "Free Wi-Fi"],
    &["Parking", "Gift Cards", "Loyalty Program"],
];

/// Opening hours picked deterministically from a fixed table.
pub fn opening_hours(name: &str) -> &'static str {
    HOURS[name.len() % HOURS.len()]
}

/// Amenity list picked deterministically from a fixed table.
pub fn amenities(name: &str) -> &'static [&'static str] {
    AMENITIES[name.len() % AMENITIES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_non_alphanumerics() {
        assert_eq!(slug("Bella Vista Restaurant"), "bellavistarestaurant");
        assert_eq!(slug("The Corner Bakery & Co."), "thecornerbakeryco");
    }

    #[test]
    fn derived_addresses_use_the_slug() {
        assert_eq!(
            contact_email("Tech Solutions Pro"),
            "contact@techsolutionspro.com"
        );
        assert_eq!(website("Tech Solutions Pro"), "www.techsolutionspro.com");
        assert_eq!(
            subdomain("Metro Deals Network"),
            "metrodealsnetwork.localdeals.app"
        );
    }

    #[test]
    fn phone_is_stable_and_well_formed() {
        let a = phone("Bella Vista Restaurant");
        let b = phone("Bella Vista Restaurant");
        assert_eq!(a, b);
        assert!(a.starts_with("(555) "));
        assert_eq!(a.len(), "(555) 000-0000".len());
    }

    #[test]
    fn referral_code_combines_initials_and_id_digits() {
        assert_eq!(referral_code("Sarah Mitchell", "USR-004"), "SM-004");
    }

    #[test]
    fn billing_account_pads_digits() {
        assert_eq!(billing_account("DIS-012"), "ACCT-000012");
    }

    #[test]
    fn hours_and_amenities_are_deterministic() {
        assert_eq!(opening_hours("Bella"), opening_hours("Bella"));
        assert!(!amenities("Bella").is_empty());
    }
}
