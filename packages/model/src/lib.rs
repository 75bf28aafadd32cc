//! # Engage Model
//!
//! Document model for the page-composition engine.
//!
//! A page is a tree: `PageDocument` → `Section` → `Element`. Elements are a
//! closed tagged union (button, social, text, image), each variant owning a
//! type-specific property bag. The tree is edited exclusively through the
//! operations in [`mutations`], which are pure: every operation takes the
//! current document and returns a new one, or an error plus the untouched
//! original.
//!
//! ```text
//! PageDocument
//! ├── settings     (render-only toggles)
//! ├── appearance   (page-level theme)
//! └── sections[]
//!     └── elements[]   (tagged property bags)
//! ```
//!
//! ## Core principles
//!
//! 1. **Whole-bag replacement**: element updates swap the entire property
//!    bag, never merge individual fields. This prevents stale derived fields
//!    (e.g. a `boxShadow` string recomputed from its four sub-fields).
//! 2. **Ids are document-unique**: generated from a monotonic counter and
//!    re-checked against the document, never from timestamps.
//! 3. **Variants are immutable**: an element can be replaced but never
//!    re-typed in place.

pub mod document;
pub mod elements;
pub mod errors;
pub mod id_generator;
pub mod mutations;

pub use document::{PageAppearance, PageDocument, PageSettings, Section};
pub use elements::{
    AccessibilityProps, AnimationProps, BorderProps, ButtonKind, ButtonProps, Element,
    ElementKind, ElementProps, HoverProps, ImageProps, ResponsiveProps, ShadowProps,
    SocialLink, SocialProps, TextProps,
};
pub use errors::DocumentError;
pub use id_generator::IdGenerator;
pub use mutations::{Applied, Direction, Mutation, SectionPatch};
