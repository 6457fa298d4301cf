// dashkit/src/lib.rs
//
// Shared display records and pure logic for the LocalDeals admin dashboards.
// Everything here is framework-free so it can be unit tested off-browser.

pub mod errors;
pub mod filter;
pub mod metrics;
pub mod synth;
pub mod tabs;
pub mod types;

pub use errors::DashError;
