// dashkit/src/metrics.rs
//
// Derived display statistics. Every figure shown on a stats card or chart
// is a deterministic arithmetic function of the input record, computed once
// per render. There is no measurement pipeline behind these numbers.

/// Fabricated deal views for a user: each saved deal is shown as 41 views.
pub fn deal_views(saved_deals: u32) -> u64 {
    (saved_deals as f64 * 41.0).floor() as u64
}

/// Fabricated redemptions: 18% of views, floored.
pub fn redemptions(views: u64) -> u64 {
    (views as f64 * 0.18).floor() as u64
}

/// Engagement as a percentage of views that became redemptions.
pub fn engagement_rate(views: u64, redemptions: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    (redemptions as f64 / views as f64) * 100.0
}

/// Share of `part` in `total`, as a percentage.
pub fn revenue_share(part: f64, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    (part / total) * 100.0
}

/// Compounding monthly series used to fabricate chart datasets:
/// `base`, then `base * (1 + rate)`, `base * (1 + rate)^2`, ...
pub fn monthly_trend(base: f64, growth_rate_pct: f64, points: usize) -> Vec<f64> {
    let factor = 1.0 + growth_rate_pct / 100.0;
    (0..points).map(|i| base * factor.powi(i as i32)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_scale_linearly() {
        assert_eq!(deal_views(0), 0);
        assert_eq!(deal_views(12), 492);
    }

    #[test]
    fn redemptions_floor() {
        assert_eq!(redemptions(0), 0);
        assert_eq!(redemptions(100), 18);
        // 41 * 0.18 = 7.38 -> 7
        assert_eq!(redemptions(41), 7);
    }

    #[test]
    fn engagement_guards_zero_views() {
        assert_eq!(engagement_rate(0, 0), 0.0);
        assert!((engagement_rate(200, 36) - 18.0).abs() < 1e-9);
    }

    #[test]
    fn revenue_share_guards_zero_total() {
        assert_eq!(revenue_share(50.0, 0.0), 0.0);
        assert!((revenue_share(25.0, 100.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn trend_length_and_compounding() {
        let trend = monthly_trend(1000.0, 10.0, 4);
        assert_eq!(trend.len(), 4);
        assert!((trend[0] - 1000.0).abs() < 1e-9);
        assert!((trend[3] - 1331.0).abs() < 1e-6);
    }

    #[test]
    fn flat_trend_with_zero_growth() {
        let trend = monthly_trend(500.0, 0.0, 6);
        assert!(trend.iter().all(|v| (*v - 500.0).abs() < 1e-9));
    }
}
