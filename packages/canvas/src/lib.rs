//! Design-surface renderer.
//!
//! Turns a page document into a tree of virtual nodes plus a set of
//! scope-keyed pseudo-state rules, for the host to paint as the live
//! editing canvas.
//!
//!   PageDocument ──> render_document ──> CanvasFragment
//!                                          ├─ VNode tree (inline styles)
//!                                          └─ StyleRule list (:hover/:active)
//!
//! Static layout styling lives here; all dynamic styling (palette, hover
//! and active deltas, transitions) comes from `engage_style` so the
//! published template output stays visually identical.

pub mod renderer;
pub mod vnode;

pub use engage_style::{ACTIVE_TRANSITION, BASE_TRANSITION};
pub use renderer::{render_document, render_element, RenderOptions};
pub use vnode::{CanvasFragment, StyleRule, VNode};
