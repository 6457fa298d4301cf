// services/admin-dash/src/components/tabs.rs
//
// LocalDeals Admin - Tab Strip Component
// Fixed label strip with ‹/› cycle buttons that wrap around circularly.
//

use leptos::*;

use dashkit::tabs::{next_tab, prev_tab};

#[component]
pub fn TabBar(labels: &'static [&'static str], active: RwSignal<usize>) -> impl IntoView {
    let count = labels.len();

    view! {
        <div class="tab-bar">
            <button
                class="tab-cycle"
                on:click=move |_| active.update(|i| *i = prev_tab(*i, count))
            >
                "‹"
            </button>

            <div class="tab-strip">
                {labels
                    .iter()
                    .enumerate()
                    .map(|(i, label)| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == i { "tab tab-active" } else { "tab" }
                                }
                                on:click=move |_| active.set(i)
                            >
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                class="tab-cycle"
                on:click=move |_| active.update(|i| *i = next_tab(*i, count))
            >
                "›"
            </button>
        </div>
    }
}
