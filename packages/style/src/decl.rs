//! Resolved style descriptors.

use engage_model::ShadowProps;
use serde::{Deserialize, Serialize};

/// Static transition present on every element's inline style, independent
/// of the hover-derived transition on the pseudo-state rules.
pub const BASE_TRANSITION: &str = "color 0.15s ease-in-out, background-color 0.15s ease-in-out, \
     border-color 0.15s ease-in-out, box-shadow 0.15s ease-in-out";

/// Transition applied to the active ("press") state for quick feedback.
pub const ACTIVE_TRANSITION: &str = "all 0.1s ease-out";

/// A flat set of visual declarations. Only the slots the derivation engine
/// owns are represented; static layout styling (padding, font sizes, border
/// widths) belongs to the renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDecl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl StyleDecl {
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Declarations as CSS `(property, value)` pairs in a fixed order, so
    /// both renderers emit byte-identical declaration lists.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(v) = &self.background {
            out.push(("background", v.as_str()));
        }
        if let Some(v) = &self.color {
            out.push(("color", v.as_str()));
        }
        if let Some(v) = &self.border_color {
            out.push(("border-color", v.as_str()));
        }
        if let Some(v) = &self.box_shadow {
            out.push(("box-shadow", v.as_str()));
        }
        if let Some(v) = &self.transform {
            out.push(("transform", v.as_str()));
        }
        if let Some(v) = &self.filter {
            out.push(("filter", v.as_str()));
        }
        out
    }

    /// Overlay `delta` on top of `self`: set slots in the delta win.
    pub fn merged(&self, delta: &StyleDecl) -> StyleDecl {
        StyleDecl {
            background: delta.background.clone().or_else(|| self.background.clone()),
            color: delta.color.clone().or_else(|| self.color.clone()),
            border_color: delta
                .border_color
                .clone()
                .or_else(|| self.border_color.clone()),
            box_shadow: delta.box_shadow.clone().or_else(|| self.box_shadow.clone()),
            transform: delta.transform.clone().or_else(|| self.transform.clone()),
            filter: delta.filter.clone().or_else(|| self.filter.clone()),
        }
    }
}

/// The derived visual styling for one element instance. Derived on demand,
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub base: StyleDecl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<StyleDecl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<StyleDecl>,
    pub transition_props: Vec<String>,
}

impl ResolvedStyle {
    /// CSS transition value covering every property in the transition list.
    pub fn transition_value(&self, duration: &str) -> String {
        self.transition_props
            .iter()
            .map(|prop| format!("{} {} ease", prop, duration))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Editor-time pseudo-state simulation. When set, the corresponding delta is
/// statically merged into the base declarations (the design surface is not
/// hovered by a real pointer during editing review).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simulate {
    pub hover: bool,
    pub active: bool,
}

/// Assemble the box-shadow value from its sub-fields. `None` while the
/// shadow toggle is `none`; each sub-field defaults independently.
pub fn box_shadow_value(shadow: &ShadowProps) -> Option<String> {
    if shadow.box_shadow == "none" {
        return None;
    }
    let or = |value: &str, fallback: &str| -> String {
        if value.is_empty() {
            fallback.to_string()
        } else {
            value.to_string()
        }
    };
    Some(format!(
        "{} {} {} {} {}",
        or(&shadow.box_shadow_offset_x, "0"),
        or(&shadow.box_shadow_offset_y, "4px"),
        or(&shadow.box_shadow_blur, "10px"),
        or(&shadow.box_shadow_spread, "0"),
        or(&shadow.box_shadow_color, "rgba(0,0,0,0.2)"),
    ))
}
