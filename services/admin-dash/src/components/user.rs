// services/admin-dash/src/components/user.rs
//
// LocalDeals Admin - User Detail Screen
//

use leptos::*;

use dashkit::types::UserRecord;
use dashkit::{metrics, synth};

use super::business::DetailRow;
use super::cards::{format_number, format_percent, StatCard};
use super::charts::TrendLine;
use super::tabs::TabBar;

const TABS: &[&str] = &["Overview", "Activity", "Account"];

const DEVICES: &[&str] = &["iPhone 15 · iOS 18", "Pixel 9 · Android 15", "Galaxy S24 · Android 15"];

#[component]
pub fn UserDetail(
    user: UserRecord,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_suspend: Callback<()>,
) -> impl IntoView {
    let tab = create_rw_signal(0usize);

    // Fabricated activity figures, derived once per render from the record
    let views = metrics::deal_views(user.saved_deals);
    let redeemed = metrics::redemptions(views);
    let engagement = metrics::engagement_rate(views, redeemed);
    let trend = metrics::monthly_trend((views as f64 / 6.0).max(1.0), 6.0, 6);

    // Synthesized account block. Not authoritative.
    let email_verified = user.saved_deals > 0;
    let device = DEVICES[user.name.len() % DEVICES.len()];
    let referral = synth::referral_code(&user.name, &user.id);

    let name = user.name.clone();
    let email = user.email.clone();
    let joined = user.joined_on.clone();
    let saved = user.saved_deals as u64;

    view! {
        <div class="detail-screen user-detail">
            <div class="detail-header">
                <button class="btn btn-back" on:click=move |_| on_back.call(())>
                    "← Back"
                </button>
                <h2 class="detail-title">{name}</h2>
                <div class="detail-actions">
                    <button class="btn btn-danger" on:click=move |_| on_suspend.call(())>
                        "Suspend"
                    </button>
                </div>
            </div>

            <TabBar labels=TABS active=tab />

            <Show when=move || tab.get() == 0 fallback=|| view! {}>
                <div class="detail-panel">
                    <DetailRow label="Email" value=email.clone() />
                    <DetailRow label="Joined" value=joined.clone() />
                    <DetailRow label="Saved Deals" value=format_number(saved) />
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
                    <DetailRow
                        label="Email Verified"
                        value=if email_verified { "Yes" } else { "No" }.to_string()
                    />
                    <DetailRow label="Device" value=device.to_string() />
                    <DetailRow label="Referral Code" value=referral.clone() />
                </div>
            </Show>
        </div>
    }
}
