// services/admin-dash/src/components/approvals.rs
//
// LocalDeals Admin - Approval Queue Component
// Pending business applications for the selected partner. Approve is
// immediate; reject goes through the confirmation prompt.
//

use leptos::*;

use crate::state::{ConsoleState, PendingAction};

#[component]
pub fn ApprovalQueue(state: ConsoleState) -> impl IntoView {
    let pending = move || state.pending_businesses.get();

    view! {
        <div class="approval-queue">
            <Show when=move || pending().is_empty() fallback=|| view! {}>
                <div class="empty-state">
                    <p>"No pending applications"</p>
                </div>
            </Show>

            <For
                each=pending
                key=|business| business.id.clone()
                children=move |business| {
                    let approve_id = business.id.clone();
                    let reject_id = business.id.clone();

                    view! {
                        <div class="approval-row">
                            <span class="approval-name">{business.name.clone()}</span>
                            <span class="approval-owner">{business.owner.clone()}</span>
                            <span class="approval-category">{business.category.clone()}</span>
                            <span class="approval-plan">{business.plan.clone()}</span>
                            <div class="approval-actions">
                                <button
                                    class="btn btn-approve"
                                    on:click=move |_| state.approve(&approve_id)
                                >
                                    "Approve"
                                </button>
                                <button
                                    class="btn btn-danger"
                                    on:click=move |_| {
                                        state
                                            .request(
                                                PendingAction::RejectApplication(reject_id.clone()),
                                            )
                                    }
                                >
                                    "Reject"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
