// services/admin-dash/src/components/header.rs
//
// LocalDeals Admin - Header Component
//

use leptos::*;

use crate::state::ConsoleState;

#[component]
pub fn Header(state: ConsoleState) -> impl IntoView {
    let business_count = move || state.businesses.get().len();
    let partner_count = move || state.partners.get().len();
    let pending_count = move || state.pending_businesses.get().len();

    view! {
        <header class="header">
            <div class="header-brand">
                <span class="header-icon">"🏪"</span>
                <h1 class="header-title">"LOCALDEALS"</h1>
                <span class="header-subtitle">"Admin Control"</span>
            </div>

            <div class="header-status">
                <CountBadge name="Businesses" value=business_count class_name="badge-neutral" />
                <CountBadge name="Partners" value=partner_count class_name="badge-neutral" />
                <CountBadge name="Pending" value=pending_count class_name="badge-attention" />
            </div>

            <div class="header-actions">
                <span class="connection-status connected">"● Demo Data"</span>
            </div>
        </header>
    }
}

#[component]
fn CountBadge(
    name: &'static str,
    value: impl Fn() -> usize + 'static,
    class_name: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("count-badge {}", class_name)>
            <span class="badge-value">{move || value().to_string()}</span>
            <span class="badge-name">{name}</span>
        </div>
    }
}
