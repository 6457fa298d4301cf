// services/admin-dash/src/components/log.rs
//
// LocalDeals Admin - Activity Log Component
// Reverse-chronological feed of admin actions (approvals, removals,
// marketplace toggles) recorded by ConsoleState.
//

use leptos::*;

use crate::state::{ConsoleState, LogEntry};

// The feed shows the most recent actions; the state ring keeps up to 100.
const VISIBLE_ENTRIES: usize = 50;

#[component]
pub fn ActivityLog(state: ConsoleState) -> impl IntoView {
    let total = move || state.logs.get().len();
    let recent = move || {
        state
            .logs
            .get()
            .into_iter()
            .rev()
            .take(VISIBLE_ENTRIES)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="log-container">
            <div class="log-summary">
                <span class="log-count">{move || format!("{} actions", total())}</span>
            </div>

            <Show when=move || total() == 0 fallback=|| view! {}>
                <div class="empty-state">
                    <p>"No admin actions yet"</p>
                </div>
            </Show>

            <div class="log-scroll">
                <For
                    each=recent
                    key=|entry| format!("{}-{}", entry.timestamp, entry.message)
                    children=move |entry| view! { <ActivityRow entry=entry /> }
                />
            </div>
        </div>
    }
}

#[component]
fn ActivityRow(entry: LogEntry) -> impl IntoView {
    let level = entry.level;
    let time = clock_time(&entry.timestamp);

    view! {
        <div class=format!("log-entry {}", level.css_class())>
            <span class="log-time">{time}</span>
            <span class="log-icon">{level.icon()}</span>
            <span class="log-message">{entry.message.clone()}</span>
        </div>
    }
}

/// Trim an ISO-8601 timestamp down to the wall-clock portion; entries all
/// land on the same day, so the date adds nothing.
fn clock_time(timestamp: &str) -> String {
    timestamp
        .split('T')
        .nth(1)
        .and_then(|t| t.split('.').next())
        .unwrap_or(timestamp)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_time_keeps_only_the_time_portion() {
        assert_eq!(clock_time("2026-08-30T14:05:12.345Z"), "14:05:12");
    }

    #[test]
    fn clock_time_passes_through_non_iso_input() {
        assert_eq!(clock_time("just now"), "just now");
    }
}
