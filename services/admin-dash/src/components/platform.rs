// services/admin-dash/src/components/platform.rs
//
// LocalDeals Admin - White-Label Platform Console
// Swaps between the partner list and a partner detail view based on the
// local selection signal.
//

use leptos::*;

use dashkit::synth;
use dashkit::types::Partner;
use dashkit::DashError;

use super::approvals::ApprovalQueue;
use super::business::DetailRow;
use super::marketplace::MarketplaceGrid;
use super::tabs::TabBar;
use crate::state::{ConsoleState, LogLevel};

const PARTNER_TABS: &[&str] = &["Overview", "Approvals", "Marketplace", "Settings"];

#[component]
pub fn PlatformConsole(state: ConsoleState) -> impl IntoView {
    view! {
        <div class="platform-console">
            {move || match state.selected_partner.get() {
                None => view! { <PartnerList state=state /> }.into_view(),
                Some(id) => {
                    match state.partners.get().into_iter().find(|p| p.id == id) {
                        Some(partner) => {
                            view! {
                                <PartnerDetail
                                    state=state
                                    partner=partner
                                    on_back=move |_| state.selected_partner.set(None)
                                    on_platform_settings=move |_| {
                                        state.log(LogLevel::Info, "Platform settings opened")
                                    }
                                />
                            }
                                .into_view()
                        }
                        None => {
                            let err = DashError::UnknownEntity { id };
                            view! {
                                <div class="empty-state">
                                    <p>{err.to_string()}</p>
                                </div>
                            }
                                .into_view()
                        }
                    }
                }
            }}
        </div>
    }
}

#[component]
fn PartnerList(state: ConsoleState) -> impl IntoView {
    let partners = move || state.partners.get();

    view! {
        <div class="partner-list">
            <div class="list-header">
                <span class="col-name">"Partner"</span>
                <span class="col-domain">"Domain"</span>
                <span class="col-status">"Status"</span>
                <span class="col-count">"Businesses"</span>
                <span class="col-actions"></span>
            </div>

            <For
                each=partners
                key=|partner| partner.id.clone()
                children=move |partner| {
                    let open_id = partner.id.clone();

                    view! {
                        <div class="partner-row">
                            <span class="col-name">{partner.name.clone()}</span>
                            <span class="col-domain">{partner.domain.clone()}</span>
                            <span class=format!("col-status {}", partner.status.css_class())>
                                {partner.status.label()}
                            </span>
                            <span class="col-count">{partner.business_count}</span>
                            <button
                                class="btn btn-open"
                                on:click=move |_| {
                                    state.selected_partner.set(Some(open_id.clone()))
                                }
                            >
                                "Open Console"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn PartnerDetail(
    state: ConsoleState,
    partner: Partner,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_platform_settings: Callback<()>,
) -> impl IntoView {
    let tab = create_rw_signal(0usize);

    let subdomain = synth::subdomain(&partner.name);
    let status = partner.status;
    let name = partner.name.clone();
    let domain = partner.domain.clone();
    let branding_domain = domain.clone();
    let instance_subdomain = subdomain.clone();
    let business_count = partner.business_count as u64;

    // Partner-directory adds react to marketplace toggles
    let added_count = move || {
        state
            .listings
            .get()
            .iter()
            .filter(|l| l.is_added)
            .count()
            .to_string()
    };

    view! {
        <div class="detail-screen partner-detail">
            <div class="detail-header">
                <button class="btn btn-back" on:click=move |_| on_back.call(())>
                    "← Back"
                </button>
                <h2 class="detail-title">{name}</h2>
                <span class=format!("status-badge {}", status.css_class())>
                    {status.label()}
                </span>
            </div>

            <TabBar labels=PARTNER_TABS active=tab />

            <Show when=move || tab.get() == 0 fallback=|| view! {}>
                <div class="detail-panel">
                    <DetailRow label="Domain" value=domain.clone() />
                    <DetailRow label="Subdomain" value=subdomain.clone() />
                    <DetailRow label="Businesses" value=business_count.to_string() />
                    <div class="detail-row">
                        <span class="detail-label">"Marketplace Adds"</span>
                        <span class="detail-value">{added_count}</span>
                    </div>
                </div>
            </Show>

            <Show when=move || tab.get() == 1 fallback=|| view! {}>
                <div class="detail-panel">
                    <ApprovalQueue state=state />
                </div>
            </Show>

            <Show when=move || tab.get() == 2 fallback=|| view! {}>
                <div class="detail-panel">
                    <MarketplaceGrid state=state />
                </div>
            </Show>

            <Show when=move || tab.get() == 3 fallback=|| view! {}>
                <div class="detail-panel">
                    <DetailRow label="Branding Domain" value=branding_domain.clone() />
                    <DetailRow label="Instance" value=instance_subdomain.clone() />
                    <button
                        class="btn btn-config"
                        on:click=move |_| on_platform_settings.call(())
                    >
                        <span class="btn-icon">"⚙"</span>
                        <span class="btn-text">"Platform Settings"</span>
                    </button>
                </div>
            </Show>
        </div>
    }
}
