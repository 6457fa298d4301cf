// services/admin-dash/src/components/business.rs
//
// LocalDeals Admin - Business Detail Screen
//

use leptos::*;

use dashkit::types::Business;
use dashkit::{metrics, synth};

use super::cards::{format_number, format_percent, StatCard};
use super::charts::TrendLine;
use super::tabs::TabBar;

const TABS: &[&str] = &["Overview", "Performance", "Hours & Amenities"];

#[component]
pub fn BusinessDetail(
    business: Business,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let tab = create_rw_signal(0usize);

    // Synthesized contact block, fabricated from the name. Not authoritative.
    let email = synth::contact_email(&business.name);
    let website = synth::website(&business.name);
    let phone = synth::phone(&business.name);
    let hours = synth::opening_hours(&business.name);
    let amenities = synth::amenities(&business.name);

    // Fabricated engagement figures, derived once per render from the record
    let views = metrics::deal_views(business.name.len() as u32 * 3);
    let redeemed = metrics::redemptions(views);
    let engagement = metrics::engagement_rate(views, redeemed);
    let trend = metrics::monthly_trend(views as f64 / 6.0, 9.0, 6);

    let status = business.status;
    let name = business.name.clone();
    let owner = business.owner.clone();
    let category = business.category.clone();
    let plan = business.plan.clone();
    let approved = business.approved_on.clone();

    view! {
        <div class="detail-screen business-detail">
            <div class="detail-header">
                <button class="btn btn-back" on:click=move |_| on_back.call(())>
                    "← Back"
                </button>
                <h2 class="detail-title">{name}</h2>
                <span class=format!("status-badge {}", status.css_class())>
                    {status.label()}
                </span>
                <div class="detail-actions">
                    <button class="btn btn-edit" on:click=move |_| on_edit.call(())>
                        "Edit"
                    </button>
                    <button class="btn btn-danger" on:click=move |_| on_delete.call(())>
                        "Remove"
                    </button>
                </div>
            </div>

            <TabBar labels=TABS active=tab />

            <Show when=move || tab.get() == 0 fallback=|| view! {}>
                <div class="detail-panel">
                    <DetailRow label="Owner" value=owner.clone() />
                    <DetailRow label="Category" value=category.clone() />
                    <DetailRow label="Plan" value=plan.clone() />
                    <DetailRow label="Approved" value=approved.clone() />
                    <DetailRow label="Email" value=email.clone() />
                    <DetailRow label="Phone" value=phone.clone() />
                    <DetailRow label="Website" value=website.clone() />
                </div>
            </Show>

            <Show when=move || tab.get() == 1 fallback=|| view! {}>
                <div class="detail-panel">
                    <div class="stats-grid">
                        <StatCard
                            label="Deal Views"
                            value=move || format_number(views)
                            icon="◉"
                            class_name="stat-info"
                        />
                        <StatCard
                            label="Redemptions"
                            value=move || format_number(redeemed)
                            icon="✓"
                            class_name="stat-success"
                        />
                        <StatCard
                            label="Engagement"
                            value=move || format_percent(engagement)
                            icon="▲"
                            class_name="stat-neutral"
                        />
                    </div>
                    <TrendLine points=trend.clone() labels=("6 mo ago", "now") />
                </div>
            </Show>

            <Show when=move || tab.get() == 2 fallback=|| view! {}>
                <div class="detail-panel">
                    <DetailRow label="Hours" value=hours.to_string() />
                    <div class="amenity-list">
                        {amenities
                            .iter()
                            .map(|a| view! { <span class="amenity-chip">{*a}</span> })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub(super) fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="detail-label">{label}</span>
            <span class="detail-value">{value}</span>
        </div>
    }
}
