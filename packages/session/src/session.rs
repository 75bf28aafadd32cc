//! # Composition Session
//!
//! One client editing one page. The session owns the working document, the
//! id generator seeded for that page, and the current selection. Mutations
//! route through the document model; persistence goes through the
//! [`PageStore`] collaborator.

use crate::errors::SessionError;
use crate::store::PageStore;
use engage_canvas::{render_document, CanvasFragment, RenderOptions};
use engage_model::{DocumentError, IdGenerator, Mutation, PageDocument};
use engage_template::render_document_template;
use tracing::{debug, info, warn};

/// What the client currently has focused. Session state only, never
/// persisted with the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub section_id: Option<String>,
    pub element_id: Option<String>,
}

pub struct CompositionSession<S: PageStore> {
    store: S,
    doc: PageDocument,
    ids: IdGenerator,
    /// Server-assigned id, present once the page has been persisted.
    page_id: Option<String>,
    selection: Selection,
    dirty: bool,
    save_in_flight: bool,
}

impl<S: PageStore> CompositionSession<S> {
    /// Start composing a brand-new, not-yet-persisted page.
    pub fn new(store: S, title: impl Into<String>) -> Self {
        let doc = PageDocument::new(title);
        let ids = IdGenerator::new(&doc.title);
        let selection = Selection {
            section_id: doc.sections.first().map(|s| s.id.clone()),
            element_id: None,
        };
        Self {
            store,
            doc,
            ids,
            page_id: None,
            selection,
            dirty: false,
            save_in_flight: false,
        }
    }

    /// Open an existing page from the store.
    pub async fn load(store: S, page_id: &str) -> Result<Self, SessionError> {
        let stored = store.get_page_by_id(page_id).await?;
        info!(page_id, title = %stored.document.title, "loaded page");
        let selection = Selection {
            section_id: stored.document.sections.first().map(|s| s.id.clone()),
            element_id: None,
        };
        Ok(Self {
            store,
            ids: IdGenerator::new(&stored.id),
            doc: stored.document,
            page_id: Some(stored.id),
            selection,
            dirty: false,
            save_in_flight: false,
        })
    }

    /// Apply one editing operation. On success the document advances, the
    /// selection follows the outcome and the session becomes dirty. On
    /// rejection nothing changes.
    pub fn apply(&mut self, mutation: Mutation) -> Result<(), SessionError> {
        let applied = match mutation.apply(&self.doc, &mut self.ids) {
            Ok(applied) => applied,
            Err(error) => {
                warn!(%error, ?mutation, "mutation rejected");
                return Err(error.into());
            }
        };

        self.doc = applied.doc;
        if let Some(id) = applied.new_section_id {
            self.selection = Selection {
                section_id: Some(id),
                element_id: None,
            };
        }
        if let Some(id) = applied.new_element_id {
            self.selection.section_id = self.doc.section_of(&id).map(|s| s.id.clone());
            self.selection.element_id = Some(id);
        }
        self.repair_selection();
        self.dirty = true;
        debug!(?mutation, "applied mutation");
        Ok(())
    }

    /// Persist the document. At most one save per session may be in flight;
    /// a failed save leaves the local document untouched.
    pub async fn save(&mut self) -> Result<(), SessionError> {
        if self.save_in_flight {
            return Err(SessionError::SaveInFlight);
        }
        self.save_in_flight = true;
        let page_id = self.page_id.clone();
        let result = match &page_id {
            Some(id) => self.store.update_page(id, &self.doc).await,
            None => self.store.create_page(&self.doc).await,
        };
        self.save_in_flight = false;

        match result {
            Ok(stored) => {
                info!(page_id = %stored.id, "saved page");
                self.page_id = Some(stored.id);
                self.dirty = false;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "save failed");
                Err(error.into())
            }
        }
    }

    /// Discard local state and refetch the persisted document.
    pub async fn reload(&mut self) -> Result<(), SessionError> {
        let page_id = self.page_id.clone().ok_or(SessionError::NotLoaded)?;
        let stored = self.store.get_page_by_id(&page_id).await?;
        self.doc = stored.document;
        self.dirty = false;
        self.repair_selection();
        info!(page_id = %page_id, "reloaded page");
        Ok(())
    }

    pub fn select_section(&mut self, section_id: &str) -> Result<(), SessionError> {
        if self.doc.find_section(section_id).is_none() {
            return Err(DocumentError::SectionNotFound(section_id.into()).into());
        }
        self.selection = Selection {
            section_id: Some(section_id.into()),
            element_id: None,
        };
        Ok(())
    }

    pub fn select_element(&mut self, element_id: &str) -> Result<(), SessionError> {
        let section = self
            .doc
            .section_of(element_id)
            .ok_or_else(|| DocumentError::ElementNotFound(element_id.into()))?;
        self.selection = Selection {
            section_id: Some(section.id.clone()),
            element_id: Some(element_id.into()),
        };
        Ok(())
    }

    /// Live design-surface rendering of the current document.
    pub fn render_preview(&self, options: &RenderOptions) -> CanvasFragment {
        render_document(&self.doc, options)
    }

    /// Published-page fragment for the current document.
    pub fn render_template(&self) -> String {
        render_document_template(&self.doc)
    }

    pub fn document(&self) -> &PageDocument {
        &self.doc
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    /// Drop any selection pointers that no longer resolve. The element falls
    /// back to nothing, the section to the first one in the document.
    fn repair_selection(&mut self) {
        if let Some(id) = &self.selection.element_id {
            if self.doc.find_element(id).is_none() {
                self.selection.element_id = None;
            }
        }
        let section_valid = self
            .selection
            .section_id
            .as_deref()
            .map(|id| self.doc.find_section(id).is_some())
            .unwrap_or(false);
        if !section_valid {
            self.selection.section_id = self.doc.sections.first().map(|s| s.id.clone());
        }
    }
}
