//! # Engage Style
//!
//! Style derivation engine: pure functions mapping an element's property bag
//! to a resolved style descriptor (base colors, borders, shadow, hover and
//! active deltas, transition list).
//!
//! Both rendering back ends (the interactive canvas and the textual
//! template) consume [`derive_style`] and nothing else. Any visual rule
//! lives here exactly once; the renderers are thin formatters over the
//! output. Derivation never fails: every missing or invalid input falls back
//! to a named default.

pub mod color;
pub mod decl;
mod derive;
pub mod metrics;

pub use color::adjust_color;
pub use decl::{
    box_shadow_value, ResolvedStyle, Simulate, StyleDecl, ACTIVE_TRANSITION, BASE_TRANSITION,
};
pub use derive::{derive_style, ButtonStyleKind, DEFAULT_TRANSITION_PROPS};
pub use metrics::{button_font_size, social_icon_size};
