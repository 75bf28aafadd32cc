//! Error types for the composition session.

use crate::store::StoreError;
use engage_model::DocumentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("a save is already in flight")]
    SaveInFlight,

    #[error("page has not been persisted yet")]
    NotLoaded,
}
