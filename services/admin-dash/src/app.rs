// services/admin-dash/src/app.rs
//
// LocalDeals Admin - Main Application Component
//

use leptos::*;

use crate::components::{ActivityLog, ConfirmDialog, DirectoryView, Header, PlatformConsole};
use crate::state::{use_console_state, LogLevel, Section};

#[component]
pub fn App() -> impl IntoView {
    // Initialize reactive state with the demo dataset
    let state = use_console_state();

    state.log(LogLevel::Info, "🏪 LocalDeals Admin initialized (mock mode)");

    view! {
        <div class="admin-app">
            <Header state=state />

            <nav class="section-nav">
                <button
                    class=move || {
                        if state.section.get() == Section::Directory {
                            "nav-btn nav-active"
                        } else {
                            "nav-btn"
                        }
                    }
                    on:click=move |_| state.section.set(Section::Directory)
                >
                    "Directory"
                </button>
                <button
                    class=move || {
                        if state.section.get() == Section::Platform {
                            "nav-btn nav-active"
                        } else {
                            "nav-btn"
                        }
                    }
                    on:click=move |_| state.section.set(Section::Platform)
                >
                    "White-Label Platform"
                </button>
            </nav>

            <main class="console">
                <Show when=move || state.section.get() == Section::Directory fallback=|| view! {}>
                    <section class="panel directory-panel">
                        <h2 class="panel-title">"Directory"</h2>
                        <DirectoryView state=state />
                    </section>
                </Show>

                <Show when=move || state.section.get() == Section::Platform fallback=|| view! {}>
                    <section class="panel platform-panel">
                        <h2 class="panel-title">"White-Label Platform"</h2>
                        <PlatformConsole state=state />
                    </section>
                </Show>

                <section class="panel log-panel">
                    <h2 class="panel-title">"Activity"</h2>
                    <ActivityLog state=state />
                </section>
            </main>

            // Confirmation prompt for destructive actions
            {move || {
                state
                    .pending_action
                    .get()
                    .map(|action| {
                        view! {
                            <ConfirmDialog
                                message=action.prompt()
                                on_confirm=move |_| state.confirm_pending()
                                on_cancel=move |_| state.cancel_pending()
                            />
                        }
                    })
            }}

            <footer class="footer">
                <span class="footer-brand">"🏪 LocalDeals"</span>
                <span class="footer-tagline">"Every deal, every block"</span>
                <span class="footer-company">"localdeals.app"</span>
            </footer>
        </div>
    }
}
