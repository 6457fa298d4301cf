// services/admin-dash/src/components/marketplace.rs
//
// LocalDeals Admin - Marketplace Catalog Component
// Search + category filter over the premium catalog, recomputed
// synchronously on every keystroke / selection change.
//

use leptos::*;

use dashkit::filter::{self, ALL_CATEGORIES};

use crate::mock::CATEGORIES;
use crate::state::ConsoleState;

#[component]
pub fn MarketplaceGrid(state: ConsoleState) -> impl IntoView {
    let filtered = move || {
        filter::filter_listings(
            &state.listings.get(),
            &state.search.get(),
            &state.category.get(),
        )
    };

    view! {
        <div class="marketplace">
            <div class="marketplace-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search businesses..."
                    prop:value=move || state.search.get()
                    on:input=move |ev| state.search.set(event_target_value(&ev))
                />
                <select
                    class="category-select"
                    on:change=move |ev| state.category.set(event_target_value(&ev))
                >
                    <option
                        value=ALL_CATEGORIES
                        selected=move || state.category.get() == ALL_CATEGORIES
                    >
                        "All Categories"
                    </option>
                    {CATEGORIES
                        .iter()
                        .map(|c| {
                            view! {
                                <option value=*c selected=move || state.category.get() == *c>
                                    {*c}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || filtered().is_empty() fallback=|| view! {}>
                <div class="empty-state">
                    <p>"No businesses match your search"</p>
                </div>
            </Show>

            <div class="marketplace-grid">
                <For
                    each=filtered
                    key=|listing| (listing.id.clone(), listing.is_added)
                    children=move |listing| {
                        let id = listing.id.clone();
                        let (btn_class, btn_label) = if listing.is_added {
                            ("btn btn-remove", "Remove")
                        } else {
                            ("btn btn-add", "Add")
                        };

                        view! {
                            <div class="listing-card">
                                <div class="listing-head">
                                    <span class="listing-name">{listing.name.clone()}</span>
                                    <span class="listing-category">{listing.category.clone()}</span>
                                </div>
                                <p class="listing-description">{listing.description.clone()}</p>
                                <button class=btn_class on:click=move |_| state.toggle_listing(&id)>
                                    {btn_label}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
