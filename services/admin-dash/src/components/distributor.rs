// services/admin-dash/src/components/distributor.rs
//
// LocalDeals Admin - Distributor Detail Screen
//

use leptos::*;

use dashkit::synth;
use dashkit::types::Distributor;

use super::business::DetailRow;
use super::cards::{format_compact, format_number, format_percent, StatCard};
use super::tabs::TabBar;

const TABS: &[&str] = &["Overview", "Members", "Billing"];

#[component]
pub fn DistributorDetail(
    distributor: Distributor,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
) -> impl IntoView {
    let tab = create_rw_signal(0usize);

    // Synthesized white-label fields, fabricated from the name
    let subdomain = synth::subdomain(&distributor.name);
    let billing_email = synth::contact_email(&distributor.name);
    let account = synth::billing_account(&distributor.id);

    // Fabricated membership figures, derived inline from the record
    let members = distributor.member_count as u64;
    let active_members = (distributor.member_count as f64 * 0.62).floor() as u64;
    let books_shipped = (distributor.member_count as f64 * 1.4).floor() as u64;
    let active_pct = if members > 0 {
        (active_members as f64 / members as f64) * 100.0
    } else {
        0.0
    };

    let status = distributor.status;
    let name = distributor.name.clone();
    let contact = distributor.contact.clone();

    view! {
        <div class="detail-screen distributor-detail">
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
                </div>
            </div>

            <TabBar labels=TABS active=tab />

            <Show when=move || tab.get() == 0 fallback=|| view! {}>
                <div class="detail-panel">
                    <DetailRow label="Contact" value=contact.clone() />
                    <DetailRow label="Subdomain" value=subdomain.clone() />
                    <DetailRow label="Members" value=format_number(members) />
                </div>
            </Show>

            <Show when=move || tab.get() == 1 fallback=|| view! {}>
                <div class="detail-panel">
                    <div class="stats-grid">
                        <StatCard
                            label="Members"
                            value=move || format_number(members)
                            icon="▤"
                            class_name="stat-neutral"
                        />
                        <StatCard
                            label="Active"
                            value=move || format_number(active_members)
                            icon="✓"
                            class_name="stat-success"
                        />
                        <StatCard
                            label="Active Rate"
                            value=move || format_percent(active_pct)
                            icon="▲"
                            class_name="stat-info"
                        />
                        <StatCard
                            label="Books Shipped"
                            value=move || format_compact(books_shipped)
                            icon="◫"
                            class_name="stat-neutral"
                        />
                    </div>
                </div>
            </Show>

            <Show when=move || tab.get() == 2 fallback=|| view! {}>
                <div class="detail-panel">
                    <DetailRow label="Billing Account" value=account.clone() />
                    <DetailRow label="Billing Email" value=billing_email.clone() />
                    <DetailRow label="Billing Cycle" value="Monthly".to_string() />
                </div>
            </Show>
        </div>
    }
}
