// services/admin-dash/src/main.rs
//
// LocalDeals Admin - Admin & white-label partner console
// 🏪 "Every deal, every block"
//

mod app;
mod components;
mod mock;
mod state;

use leptos::*;

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    // Initialize logging
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🏪 LocalDeals Admin starting...");

    // Mount Leptos app
    mount_to_body(|| {
        view! { <app::App /> }
    });
}
