// services/admin-dash/src/components/cards.rs
//
// LocalDeals Admin - Statistic Cards & Number Formatting
//

use leptos::*;

#[component]
pub fn StatCard(
    label: &'static str,
    value: impl Fn() -> String + 'static,
    icon: &'static str,
    class_name: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", class_name)>
            <div class="stat-icon">{icon}</div>
            <div class="stat-content">
                <span class="stat-value">{value}</span>
                <span class="stat-label">{label}</span>
            </div>
        </div>
    }
}

/// Format large numbers with commas
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format number in compact form (e.g., 1.5M, 250K)
pub fn format_compact(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.0}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Format a dollar amount with commas and no cents
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_number(amount.floor() as u64))
}

/// Format a percentage to one decimal place
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_get_comma_grouped() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(950), "950");
        assert_eq!(format_number(48_200), "48,200");
        assert_eq!(format_number(12_000_000), "12,000,000");
    }

    #[test]
    fn compact_form_scales() {
        assert_eq!(format_compact(950), "950");
        assert_eq!(format_compact(3_600), "4K");
        assert_eq!(format_compact(1_500_000), "1.5M");
    }

    #[test]
    fn currency_floors_cents() {
        assert_eq!(format_currency(48_200.75), "$48,200");
    }

    #[test]
    fn percent_rounds_to_one_decimal() {
        assert_eq!(format_percent(12.44), "12.4%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
