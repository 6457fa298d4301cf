// services/admin-dash/src/components/directory.rs
//
// LocalDeals Admin - Directory View
// Entity tables for businesses, distributors, locations and users; a row
// selection swaps the tables out for the matching detail screen.
//

use leptos::*;

use dashkit::DashError;

use super::business::BusinessDetail;
use super::cards::format_compact;
use super::distributor::DistributorDetail;
use super::location::{LocationDetail, LocationPerformance};
use super::tabs::TabBar;
use super::user::UserDetail;
use crate::state::{ConsoleState, DirectorySelection, LogLevel, PendingAction};

const DIRECTORY_TABS: &[&str] = &["Businesses", "Distributors", "Locations", "Users"];

#[component]
pub fn DirectoryView(state: ConsoleState) -> impl IntoView {
    let tab = create_rw_signal(0usize);

    view! {
        <div class="directory">
            {move || match state.selection.get() {
                DirectorySelection::None => {
                    view! {
                        <div class="directory-tables">
                            <TabBar labels=DIRECTORY_TABS active=tab />
                            <Show when=move || tab.get() == 0 fallback=|| view! {}>
                                <BusinessTable state=state />
                            </Show>
                            <Show when=move || tab.get() == 1 fallback=|| view! {}>
                                <DistributorTable state=state />
                            </Show>
                            <Show when=move || tab.get() == 2 fallback=|| view! {}>
                                <LocationTable state=state />
                            </Show>
                            <Show when=move || tab.get() == 3 fallback=|| view! {}>
                                <UserTable state=state />
                            </Show>
                        </div>
                    }
                        .into_view()
                }
                DirectorySelection::Business(id) => {
                    match state.businesses.get().into_iter().find(|b| b.id == id) {
                        Some(business) => {
                            let edit_name = business.name.clone();
                            let delete_id = business.id.clone();
                            view! {
                                <BusinessDetail
                                    business=business
                                    on_back=move |_| state.selection.set(DirectorySelection::None)
                                    on_edit=move |_| {
                                        state.log(LogLevel::Info, &format!("Edit requested for {edit_name}"))
                                    }
                                    on_delete=move |_| {
                                        state
                                            .request(
                                                PendingAction::RemoveBusiness(delete_id.clone()),
                                            )
                                    }
                                />
                            }
                                .into_view()
                        }
                        None => missing_entity(&id),
                    }
                }
                DirectorySelection::Distributor(id) => {
                    match state.distributors.get().into_iter().find(|d| d.id == id) {
                        Some(distributor) => {
                            let edit_name = distributor.name.clone();
                            view! {
                                <DistributorDetail
                                    distributor=distributor
                                    on_back=move |_| state.selection.set(DirectorySelection::None)
                                    on_edit=move |_| {
                                        state.log(LogLevel::Info, &format!("Edit requested for {edit_name}"))
                                    }
                                />
                            }
                                .into_view()
                        }
                        None => missing_entity(&id),
                    }
                }
                DirectorySelection::Location(id) => {
                    let total_revenue: f64 = state
                        .locations
                        .get()
                        .iter()
                        .map(|l| l.monthly_revenue)
                        .sum();
                    match state.locations.get().into_iter().find(|l| l.id == id) {
                        Some(location) => {
                            let edit_city = location.city.clone();
                            view! {
                                <LocationDetail
                                    location=location
                                    total_revenue=total_revenue
                                    on_back=move |_| state.selection.set(DirectorySelection::None)
                                    on_edit=move |_| {
                                        state.log(LogLevel::Info, &format!("Edit requested for {edit_city}"))
                                    }
                                />
                            }
                                .into_view()
                        }
                        None => missing_entity(&id),
                    }
                }
                DirectorySelection::LocationPerformance(id) => {
                    match state.locations.get().into_iter().find(|l| l.id == id) {
                        Some(location) => {
                            view! {
                                <LocationPerformance
                                    location=location
                                    on_back=move |_| state.selection.set(DirectorySelection::None)
                                />
                            }
                                .into_view()
                        }
                        None => missing_entity(&id),
                    }
                }
                DirectorySelection::User(id) => {
                    match state.users.get().into_iter().find(|u| u.id == id) {
                        Some(user) => {
                            let suspend_id = user.id.clone();
                            view! {
                                <UserDetail
                                    user=user
                                    on_back=move |_| state.selection.set(DirectorySelection::None)
                                    on_suspend=move |_| {
                                        state
                                            .request(PendingAction::SuspendUser(suspend_id.clone()))
                                    }
                                />
                            }
                                .into_view()
                        }
                        None => missing_entity(&id),
                    }
                }
            }}
        </div>
    }
}

fn missing_entity(id: &str) -> View {
    let err = DashError::UnknownEntity { id: id.to_string() };
    view! {
        <div class="empty-state">
            <p>{err.to_string()}</p>
        </div>
    }
    .into_view()
}

#[component]
fn BusinessTable(state: ConsoleState) -> impl IntoView {
    let businesses = move || state.businesses.get();

    view! {
        <div class="entity-table">
            <div class="list-header">
                <span class="col-name">"Business"</span>
                <span class="col-owner">"Owner"</span>
                <span class="col-category">"Category"</span>
                <span class="col-status">"Status"</span>
                <span class="col-actions"></span>
            </div>
            <For
                each=businesses
                key=|business| business.id.clone()
                children=move |business| {
                    let view_id = business.id.clone();

                    view! {
                        <div class="entity-row">
                            <span class="col-name">{business.name.clone()}</span>
                            <span class="col-owner">{business.owner.clone()}</span>
                            <span class="col-category">{business.category.clone()}</span>
                            <span class=format!("col-status {}", business.status.css_class())>
                                {business.status.label()}
                            </span>
                            <button
                                class="btn btn-open"
                                on:click=move |_| {
                                    state
                                        .selection
                                        .set(DirectorySelection::Business(view_id.clone()))
                                }
                            >
                                "View"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn DistributorTable(state: ConsoleState) -> impl IntoView {
    let distributors = move || state.distributors.get();

    view! {
        <div class="entity-table">
            <div class="list-header">
                <span class="col-name">"Distributor"</span>
                <span class="col-contact">"Contact"</span>
                <span class="col-count">"Members"</span>
                <span class="col-status">"Status"</span>
                <span class="col-actions"></span>
            </div>
            <For
                each=distributors
                key=|distributor| distributor.id.clone()
                children=move |distributor| {
                    let view_id = distributor.id.clone();

                    view! {
                        <div class="entity-row">
                            <span class="col-name">{distributor.name.clone()}</span>
                            <span class="col-contact">{distributor.contact.clone()}</span>
                            <span class="col-count">
                                {format_compact(distributor.member_count as u64)}
                            </span>
                            <span class=format!("col-status {}", distributor.status.css_class())>
                                {distributor.status.label()}
                            </span>
                            <button
                                class="btn btn-open"
                                on:click=move |_| {
                                    state
                                        .selection
                                        .set(DirectorySelection::Distributor(view_id.clone()))
                                }
                            >
                                "View"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn LocationTable(state: ConsoleState) -> impl IntoView {
    let locations = move || state.locations.get();

    view! {
        <div class="entity-table">
            <div class="list-header">
                <span class="col-name">"Location"</span>
                <span class="col-count">"Businesses"</span>
                <span class="col-count">"Deals"</span>
                <span class="col-growth">"Growth"</span>
                <span class="col-actions"></span>
            </div>
            <For
                each=locations
                key=|location| location.id.clone()
                children=move |location| {
                    let detail_id = location.id.clone();
                    let perf_id = location.id.clone();

                    view! {
                        <div class="entity-row">
                            <span class="col-name">
                                {format!("{}, {}", location.city, location.state)}
                            </span>
                            <span class="col-count">{location.business_count}</span>
                            <span class="col-count">{location.deal_count}</span>
                            <span class="col-growth">
                                {format!("{:+.1}%", location.growth_rate)}
                            </span>
                            <div class="row-actions">
                                <button
                                    class="btn btn-open"
                                    on:click=move |_| {
                                        state
                                            .selection
                                            .set(DirectorySelection::Location(detail_id.clone()))
                                    }
                                >
                                    "View"
                                </button>
                                <button
                                    class="btn btn-open"
                                    on:click=move |_| {
                                        state
                                            .selection
                                            .set(
                                                DirectorySelection::LocationPerformance(
                                                    perf_id.clone(),
                                                ),
                                            )
                                    }
                                >
                                    "Performance"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn UserTable(state: ConsoleState) -> impl IntoView {
    let users = move || state.users.get();

    view! {
        <div class="entity-table">
            <div class="list-header">
                <span class="col-name">"User"</span>
                <span class="col-email">"Email"</span>
                <span class="col-joined">"Joined"</span>
                <span class="col-count">"Saved"</span>
                <span class="col-actions"></span>
            </div>
            <For
                each=users
                key=|user| user.id.clone()
                children=move |user| {
                    let view_id = user.id.clone();

                    view! {
                        <div class="entity-row">
                            <span class="col-name">{user.name.clone()}</span>
                            <span class="col-email">{user.email.clone()}</span>
                            <span class="col-joined">{user.joined_on.clone()}</span>
                            <span class="col-count">{user.saved_deals}</span>
                            <button
                                class="btn btn-open"
                                on:click=move |_| {
                                    state.selection.set(DirectorySelection::User(view_id.clone()))
                                }
                            >
                                "View"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
