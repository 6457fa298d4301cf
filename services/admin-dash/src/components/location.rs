// services/admin-dash/src/components/location.rs
//
// LocalDeals Admin - Location Detail Screens
// Two variants over the same record: an operational detail view and a
// performance/analytics view with fabricated trend charts.
//

use leptos::*;

use dashkit::metrics;
use dashkit::types::LocationRecord;

use super::business::DetailRow;
use super::cards::{format_currency, format_number, format_percent, StatCard};
use super::charts::TrendLine;
use super::tabs::TabBar;

const DETAIL_TABS: &[&str] = &["Overview", "Businesses & Deals"];
const PERF_TABS: &[&str] = &["Revenue Trend", "Growth"];

#[component]
pub fn LocationDetail(
    location: LocationRecord,
    total_revenue: f64,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
) -> impl IntoView {
    let tab = create_rw_signal(0usize);

    let share = metrics::revenue_share(location.monthly_revenue, total_revenue);
    let deals_per_business = if location.business_count > 0 {
        location.deal_count as f64 / location.business_count as f64
    } else {
        0.0
    };

    let title = format!("{}, {}", location.city, location.state);
    let revenue = location.monthly_revenue;
    let growth = location.growth_rate;
    let businesses = location.business_count as u64;
    let deals = location.deal_count as u64;

    view! {
        <div class="detail-screen location-detail">
            <div class="detail-header">
                <button class="btn btn-back" on:click=move |_| on_back.call(())>
                    "← Back"
                </button>
                <h2 class="detail-title">{title}</h2>
                <div class="detail-actions">
                    <button class="btn btn-edit" on:click=move |_| on_edit.call(())>
                        "Edit"
                    </button>
                </div>
            </div>

            <TabBar labels=DETAIL_TABS active=tab />

            <Show when=move || tab.get() == 0 fallback=|| view! {}>
                <div class="detail-panel">
                    <DetailRow label="Monthly Revenue" value=format_currency(revenue) />
                    <DetailRow label="Revenue Share" value=format_percent(share) />
                    <DetailRow label="Growth Rate" value=format_percent(growth) />
                </div>
            </Show>

            <Show when=move || tab.get() == 1 fallback=|| view! {}>
                <div class="detail-panel">
                    <div class="stats-grid">
                        <StatCard
                            label="Businesses"
                            value=move || format_number(businesses)
                            icon="▤"
                            class_name="stat-neutral"
                        />
                        <StatCard
                            label="Deals"
                            value=move || format_number(deals)
                            icon="◉"
                            class_name="stat-info"
                        />
                        <StatCard
                            label="Deals / Business"
                            value=move || format!("{deals_per_business:.1}")
                            icon="▲"
                            class_name="stat-success"
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn LocationPerformance(
    location: LocationRecord,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let tab = create_rw_signal(0usize);

    // Fabricated six-month revenue history, compounded at the growth rate
    let trend = metrics::monthly_trend(location.monthly_revenue, location.growth_rate, 6);
    let projected = trend.last().copied().unwrap_or(location.monthly_revenue);

    let title = format!("{}, {} — Performance", location.city, location.state);
    let revenue = location.monthly_revenue;
    let growth = location.growth_rate;

    view! {
        <div class="detail-screen location-performance">
            <div class="detail-header">
                <button class="btn btn-back" on:click=move |_| on_back.call(())>
                    "← Back"
                </button>
                <h2 class="detail-title">{title}</h2>
            </div>

            <TabBar labels=PERF_TABS active=tab />

            <Show when=move || tab.get() == 0 fallback=|| view! {}>
                <div class="detail-panel">
                    <TrendLine points=trend.clone() labels=("this month", "+6 mo") />
                </div>
            </Show>

            <Show when=move || tab.get() == 1 fallback=|| view! {}>
                <div class="detail-panel">
                    <div class="stats-grid">
                        <StatCard
                            label="Current"
                            value=move || format_currency(revenue)
                            icon="◉"
                            class_name="stat-neutral"
                        />
                        <StatCard
                            label="Growth"
                            value=move || format_percent(growth)
                            icon="▲"
                            class_name="stat-success"
                        />
                        <StatCard
                            label="6-mo Projection"
                            value=move || format_currency(projected)
                            icon="⏱"
                            class_name="stat-info"
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
