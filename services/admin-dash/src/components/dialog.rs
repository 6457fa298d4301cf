// services/admin-dash/src/components/dialog.rs
//
// LocalDeals Admin - Confirmation Dialog
// Destructive actions are gated behind this synchronous prompt; the caller
// decides what confirm/cancel mean.
//

use leptos::*;

#[component]
pub fn ConfirmDialog(
    message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-overlay">
            <div class="dialog">
                <div class="dialog-icon">"⚠"</div>
                <p class="dialog-message">{message}</p>
                <div class="dialog-actions">
                    <button class="btn btn-cancel" on:click=move |_| on_cancel.call(())>
                        "Cancel"
                    </button>
                    <button class="btn btn-danger" on:click=move |_| on_confirm.call(())>
                        "Confirm"
                    </button>
                </div>
            </div>
        </div>
    }
}
