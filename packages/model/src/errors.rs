//! Error values for document operations.

use crate::elements::ElementKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Cannot delete the last remaining section")]
    LastSection,

    #[error("Element is a {expected} and cannot be replaced with a {found}")]
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
}
