// dashkit/src/errors.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashError {
    #[error("Unknown entity: {id}")]
    UnknownEntity { id: String },
}
