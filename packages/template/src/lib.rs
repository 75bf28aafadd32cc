//! Published-page template renderer.
//!
//! Emits self-contained textual fragments for pages served outside the
//! editor. Each fragment is a `<style>` block carrying the element's
//! `:hover` / `:active` rules (declarations forced with `!important` so
//! host-page theme CSS cannot win) followed by the markup with its inline
//! base styling.
//!
//! Rendering never fails; user-supplied values are escaped per context on
//! the way out.

pub mod escape;
pub mod renderer;
pub mod writer;

pub use escape::{escape_html, sanitize_style_value};
pub use renderer::{
    render_document_template, render_document_template_with, render_element_template,
    render_element_template_with,
};
pub use writer::{TemplateOptions, TemplateWriter};
