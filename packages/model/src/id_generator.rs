//! Document-scoped id generation.
//!
//! Ids are `{prefix}-{seed}-{n}`: a CRC32 seed derived from the page key and
//! a monotonic counter. Before handing an id out the generator re-checks it
//! against the document, so collisions with legacy ids in loaded documents
//! (the old scheme derived them from timestamps) are impossible.

use crate::document::PageDocument;
use crc32fast::Hasher;

/// Stable seed for a page key.
pub fn page_seed(key: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(key: &str) -> Self {
        Self {
            seed: page_seed(key),
            count: 0,
        }
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    fn next(&mut self, prefix: &str) -> String {
        self.count += 1;
        format!("{}-{}-{}", prefix, self.seed, self.count)
    }

    /// Next section id not present anywhere in the document.
    pub fn next_section_id(&mut self, doc: &PageDocument) -> String {
        loop {
            let id = self.next("section");
            if !doc.contains_id(&id) {
                return id;
            }
        }
    }

    /// Next element id not present anywhere in the document.
    pub fn next_element_id(&mut self, doc: &PageDocument) -> String {
        loop {
            let id = self.next("element");
            if !doc.contains_id(&id) {
                return id;
            }
        }
    }
}
