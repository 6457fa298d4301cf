// services/admin-dash/src/components/mod.rs
//
// LocalDeals Admin - UI Components
//

mod approvals;
mod business;
mod cards;
mod charts;
mod dialog;
mod directory;
mod distributor;
mod header;
mod location;
mod log;
mod marketplace;
mod platform;
mod tabs;
mod user;

pub use approvals::ApprovalQueue;
pub use business::BusinessDetail;
pub use cards::StatCard;
pub use charts::TrendLine;
pub use dialog::ConfirmDialog;
pub use directory::DirectoryView;
pub use distributor::DistributorDetail;
pub use header::Header;
pub use location::{LocationDetail, LocationPerformance};
pub use log::ActivityLog;
pub use marketplace::MarketplaceGrid;
pub use platform::PlatformConsole;
pub use tabs::TabBar;
pub use user::UserDetail;
