// services/admin-dash/src/state.rs
//
// LocalDeals Admin - Reactive State Management
//

use leptos::*;
use serde::{Deserialize, Serialize};

use dashkit::filter;
use dashkit::types::{
    Business, Distributor, EntityStatus, LocationRecord, MarketplaceListing, Partner, UserRecord,
};

use crate::mock;

/// Top-level console section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Directory,
    Platform,
}

/// Which directory detail screen is showing, if any. `None` means the
/// directory tables are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorySelection {
    None,
    Business(String),
    Distributor(String),
    Location(String),
    LocationPerformance(String),
    User(String),
}

/// A destructive action waiting on the confirmation prompt. Nothing runs
/// until the admin confirms; cancel discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    RemoveBusiness(String),
    SuspendUser(String),
    RejectApplication(String),
}

impl PendingAction {
    pub fn prompt(&self) -> String {
        match self {
            Self::RemoveBusiness(id) => {
                format!("Remove business {id} from the directory? This cannot be undone.")
            }
            Self::SuspendUser(id) => format!("Suspend user {id}? They will lose app access."),
            Self::RejectApplication(id) => format!("Reject application from {id}?"),
        }
    }
}

/// Severity of an admin action in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "log-info",
            Self::Warn => "log-warn",
            Self::Error => "log-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "●",
            Self::Warn => "⚠",
            Self::Error => "✗",
        }
    }
}

/// Log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Main application state.
/// All fields are RwSignal which is Copy, so ConsoleState is Copy.
#[derive(Clone, Copy)]
pub struct ConsoleState {
    // Navigation
    pub section: RwSignal<Section>,
    pub selection: RwSignal<DirectorySelection>,
    pub selected_partner: RwSignal<Option<String>>,

    // Directory collections
    pub businesses: RwSignal<Vec<Business>>,
    pub distributors: RwSignal<Vec<Distributor>>,
    pub locations: RwSignal<Vec<LocationRecord>>,
    pub users: RwSignal<Vec<UserRecord>>,

    // White-label platform
    pub partners: RwSignal<Vec<Partner>>,
    pub pending_businesses: RwSignal<Vec<Business>>,
    pub listings: RwSignal<Vec<MarketplaceListing>>,

    // Marketplace filter inputs
    pub search: RwSignal<String>,
    pub category: RwSignal<String>,

    // Confirm-gated action, if any
    pub pending_action: RwSignal<Option<PendingAction>>,

    // Admin action log
    pub logs: RwSignal<Vec<LogEntry>>,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self {
            section: create_rw_signal(Section::Directory),
            selection: create_rw_signal(DirectorySelection::None),
            selected_partner: create_rw_signal(None),
            businesses: create_rw_signal(mock::sample_businesses()),
            distributors: create_rw_signal(mock::sample_distributors()),
            locations: create_rw_signal(mock::sample_locations()),
            users: create_rw_signal(mock::sample_users()),
            partners: create_rw_signal(mock::sample_partners()),
            pending_businesses: create_rw_signal(mock::sample_pending_businesses()),
            listings: create_rw_signal(mock::sample_listings()),
            search: create_rw_signal(String::new()),
            category: create_rw_signal(filter::ALL_CATEGORIES.to_string()),
            pending_action: create_rw_signal(None),
            logs: create_rw_signal(vec![]),
        }
    }

    /// Add a log entry
    pub fn log(&self, level: LogLevel, message: &str) {
        let entry = LogEntry {
            timestamp: now_iso(),
            level,
            message: message.to_string(),
        };

        self.logs.update(|logs| {
            logs.push(entry);
            // Keep only last 100 entries
            if logs.len() > 100 {
                logs.remove(0);
            }
        });
    }

    /// Flip a marketplace listing's added flag for the selected partner.
    pub fn toggle_listing(&self, id: &str) {
        let mut result = Ok(false);
        self.listings.update(|listings| {
            result = filter::toggle_added(listings, id);
        });
        match result {
            Ok(true) => self.log(LogLevel::Info, &format!("Added {id} to partner directory")),
            Ok(false) => self.log(LogLevel::Info, &format!("Removed {id} from partner directory")),
            Err(e) => self.log(LogLevel::Error, &e.to_string()),
        }
    }

    /// Approve a pending business: it moves into the active directory with
    /// today's date as the approval date.
    pub fn approve(&self, id: &str) {
        let mut approved = None;
        self.pending_businesses.update(|pending| {
            if let Some(pos) = pending.iter().position(|b| b.id == id) {
                approved = Some(pending.remove(pos));
            }
        });
        match approved {
            Some(mut business) => {
                business.status = EntityStatus::Active;
                business.approved_on = today();
                self.log(LogLevel::Info, &format!("Approved {} ({id})", business.name));
                self.businesses.update(|businesses| businesses.push(business));
            }
            None => self.log(LogLevel::Error, &format!("Unknown entity: {id}")),
        }
    }

    /// Reject a pending business application. Runs post-confirmation.
    pub fn reject(&self, id: &str) {
        let mut rejected = None;
        self.pending_businesses.update(|pending| {
            if let Some(pos) = pending.iter().position(|b| b.id == id) {
                rejected = Some(pending.remove(pos));
            }
        });
        match rejected {
            Some(business) => {
                self.log(LogLevel::Warn, &format!("Rejected {} ({id})", business.name))
            }
            None => self.log(LogLevel::Error, &format!("Unknown entity: {id}")),
        }
    }

    /// Remove a business from the active directory. Runs post-confirmation.
    pub fn remove_business(&self, id: &str) {
        self.businesses.update(|businesses| businesses.retain(|b| b.id != id));
        self.selection.set(DirectorySelection::None);
        self.log(LogLevel::Warn, &format!("Removed business {id}"));
    }

    /// Suspend a user account. Runs post-confirmation.
    pub fn suspend_user(&self, id: &str) {
        self.selection.set(DirectorySelection::None);
        self.log(LogLevel::Warn, &format!("Suspended user {id}"));
    }

    /// Stage a destructive action behind the confirmation prompt.
    pub fn request(&self, action: PendingAction) {
        self.pending_action.set(Some(action));
    }

    /// Run the staged action, if any.
    pub fn confirm_pending(&self) {
        if let Some(action) = self.pending_action.get_untracked() {
            match &action {
                PendingAction::RemoveBusiness(id) => self.remove_business(id),
                PendingAction::SuspendUser(id) => self.suspend_user(id),
                PendingAction::RejectApplication(id) => self.reject(id),
            }
        }
        self.pending_action.set(None);
    }

    /// Discard the staged action.
    pub fn cancel_pending(&self) {
        self.pending_action.set(None);
        self.log(LogLevel::Info, "Action cancelled");
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to get/create console state
pub fn use_console_state() -> ConsoleState {
    ConsoleState::new()
}

fn now_iso() -> String {
    js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default()
}

fn today() -> String {
    now_iso().split('T').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels_map_to_distinct_presentation() {
        let levels = [LogLevel::Info, LogLevel::Warn, LogLevel::Error];
        for level in levels {
            assert!(level.css_class().starts_with("log-"));
        }
        assert_ne!(LogLevel::Info.css_class(), LogLevel::Warn.css_class());
        assert_ne!(LogLevel::Warn.icon(), LogLevel::Error.icon());
    }

    #[test]
    fn pending_action_prompts_name_the_entity() {
        let action = PendingAction::RemoveBusiness("BUS-001".to_string());
        assert!(action.prompt().contains("BUS-001"));
        let action = PendingAction::SuspendUser("USR-002".to_string());
        assert!(action.prompt().contains("USR-002"));
    }
}
