//! # Page Composition Session
//!
//! Ties the document model, both renderers and a persistence backend into
//! one editing surface:
//!
//! ```text
//! CompositionSession
//!   ├── PageDocument + IdGenerator   (engage-model)
//!   ├── render_preview               (engage-canvas)
//!   ├── render_template              (engage-template)
//!   └── PageStore                    (backend collaborator)
//! ```
//!
//! The session applies mutations locally and saves explicitly; there is no
//! background sync, no retry and at most one save in flight at a time.

pub mod errors;
pub mod session;
pub mod store;

pub use errors::SessionError;
pub use session::{CompositionSession, Selection};
pub use store::{PageStore, StoreError, StoredPage};
