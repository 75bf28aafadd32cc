//! Persistence contract.
//!
//! The session never talks to a backend directly; it goes through a
//! [`PageStore`] implementation. The server owns page ids: `create_page`
//! returns the id it assigned.

use engage_model::PageDocument;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A page as the backend stores it: the server-assigned id plus the
/// document, flattened into one JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPage {
    pub id: String,
    #[serde(flatten)]
    pub document: PageDocument,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("page not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("network error: {0}")]
    Network(String),
}

/// Backend operations the session needs. Implementations decide transport;
/// the session only sees documents in and out.
#[allow(async_fn_in_trait)]
pub trait PageStore {
    async fn get_page_by_id(&self, id: &str) -> Result<StoredPage, StoreError>;

    /// Persist a new page. The server assigns the id.
    async fn create_page(&self, document: &PageDocument) -> Result<StoredPage, StoreError>;

    async fn update_page(&self, id: &str, document: &PageDocument)
        -> Result<StoredPage, StoreError>;
}

impl<S: PageStore> PageStore for std::sync::Arc<S> {
    async fn get_page_by_id(&self, id: &str) -> Result<StoredPage, StoreError> {
        (**self).get_page_by_id(id).await
    }

    async fn create_page(&self, document: &PageDocument) -> Result<StoredPage, StoreError> {
        (**self).create_page(document).await
    }

    async fn update_page(
        &self,
        id: &str,
        document: &PageDocument,
    ) -> Result<StoredPage, StoreError> {
        (**self).update_page(id, document).await
    }
}
