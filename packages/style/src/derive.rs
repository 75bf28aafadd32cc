//! The shared derivation function.
//!
//! One entry point, [`derive_style`], exhaustive over element kinds. The
//! hover and active tables below are the single source of truth for both
//! renderers; neither renderer carries any color or transition math of its
//! own.

use crate::color::adjust_color;
use crate::decl::{box_shadow_value, ResolvedStyle, Simulate, StyleDecl};
use engage_model::{ButtonProps, ElementProps, HoverProps, ImageProps, SocialProps, TextProps};

/// Fallback transition list used when no declaration group differs between
/// base and hover.
pub const DEFAULT_TRANSITION_PROPS: [&str; 4] =
    ["color", "background-color", "border-color", "box-shadow"];

const DEFAULT_BUTTON_COLOR: &str = "#007bff";
const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// Visual style family of a button. Parsed leniently: unknown values fall
/// back to `Filled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyleKind {
    Filled,
    Outline,
    Text,
    Gradient,
}

impl ButtonStyleKind {
    pub fn parse(value: &str) -> Self {
        match value {
            "outline" => ButtonStyleKind::Outline,
            "text" => ButtonStyleKind::Text,
            "gradient" => ButtonStyleKind::Gradient,
            _ => ButtonStyleKind::Filled,
        }
    }

    fn has_background(&self) -> bool {
        !matches!(self, ButtonStyleKind::Outline | ButtonStyleKind::Text)
    }
}

/// Derive the complete visual styling for one element.
///
///// Deterministic and total: identical inputs yield structurally equal
/// output, and missing optional properties use named defaults. When
/// `sim.hover` / `sim.active` are set the corresponding delta is merged
/// into `base` (hover first, then active); the `hover`/`active` members and
/// the transition list are populated either way.
pub fn derive_style(props: &ElementProps, sim: Simulate) -> ResolvedStyle {
    let style = match props {
        ElementProps::Button(bag) => button_style(bag),
        ElementProps::Social(bag) => social_style(bag),
        ElementProps::Text(bag) => text_style(bag),
        ElementProps::Image(bag) => image_style(bag),
    };
    simulate(style, sim)
}

fn simulate(style: ResolvedStyle, sim: Simulate) -> ResolvedStyle {
    let mut base = style.base.clone();
    if sim.hover {
        if let Some(hover) = &style.hover {
            base = base.merged(hover);
        }
    }
    if sim.active {
        if let Some(active) = &style.active {
            base = base.merged(active);
        }
    }
    ResolvedStyle { base, ..style }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn gradient(color: &str) -> String {
    format!(
        "linear-gradient(45deg, {}, {})",
        color,
        adjust_color(color, 40)
    )
}

fn button_style(bag: &ButtonProps) -> ResolvedStyle {
    let style = ButtonStyleKind::parse(&bag.button_style);
    let color = or_default(&bag.button_color, DEFAULT_BUTTON_COLOR);
    let text = or_default(&bag.text_color, DEFAULT_TEXT_COLOR);

    // Variant → color mapping.
    let mut base = match style {
        ButtonStyleKind::Filled => StyleDecl {
            background: Some(color.to_string()),
            color: Some(text.to_string()),
            border_color: Some(color.to_string()),
            ..Default::default()
        },
        ButtonStyleKind::Outline => StyleDecl {
            background: Some("transparent".into()),
            color: Some(color.to_string()),
            border_color: Some(color.to_string()),
            ..Default::default()
        },
        ButtonStyleKind::Text => StyleDecl {
            background: Some("transparent".into()),
            color: Some(color.to_string()),
            border_color: Some("transparent".into()),
            ..Default::default()
        },
        ButtonStyleKind::Gradient => StyleDecl {
            background: Some(gradient(color)),
            color: Some(text.to_string()),
            border_color: Some("transparent".into()),
            ..Default::default()
        },
    };
    base.box_shadow = box_shadow_value(&bag.shadow);

    let hover = bag.hover.hover_effect.then(|| {
        let mut hover = effect_delta(&bag.hover.hover_effect_type);

        // Explicit hover colors win over the effect table, mirroring the
        // base variant mapping.
        if let Some(hover_color) = &bag.hover_button_color {
            match style {
                ButtonStyleKind::Gradient => hover.background = Some(gradient(hover_color)),
                s if s.has_background() => hover.background = Some(hover_color.clone()),
                _ => {}
            }
            if matches!(style, ButtonStyleKind::Outline | ButtonStyleKind::Text) {
                hover.color = Some(hover_color.clone());
            }
        } else if bag.hover.hover_effect_type == "color-shift" {
            // No explicit override: shift the base palette.
            if style == ButtonStyleKind::Outline {
                hover.background = Some(color.to_string());
                hover.color = Some(DEFAULT_TEXT_COLOR.into());
            } else {
                hover.background = Some(adjust_color(color, 40));
                hover.color = Some(text.to_string());
            }
        }
        if let Some(hover_text) = &bag.hover_text_color {
            hover.color = Some(hover_text.clone());
        }
        if let Some(hover_border) = &bag.hover_border_color {
            if style != ButtonStyleKind::Text {
                hover.border_color = Some(hover_border.clone());
            }
        }
        hover
    });

    let active = bag.hover.hover_effect.then(|| {
        let mut active = press_delta(&bag.hover.hover_effect_type);
        if let Some(hover_color) = &bag.hover_button_color {
            active.background = Some(match style {
                ButtonStyleKind::Gradient => format!(
                    "linear-gradient(45deg, {}, {})",
                    adjust_color(hover_color, -20),
                    adjust_color(hover_color, 20)
                ),
                _ => adjust_color(hover_color, -20),
            });
        } else if style.has_background() && style != ButtonStyleKind::Gradient {
            active.background = Some(adjust_color(color, -20));
        }
        active
    });

    let transition_props = transition_scan(&base, hover.as_ref());
    ResolvedStyle {
        base,
        hover,
        active,
        transition_props,
    }
}

fn social_style(bag: &SocialProps) -> ResolvedStyle {
    let icon_color = or_default(&bag.icon_color, "#212529");
    let has_border = bag.border.border_style != "none";

    let base = StyleDecl {
        background: Some(or_default(&bag.background_color, "transparent").to_string()),
        color: Some(icon_color.to_string()),
        border_color: has_border.then(|| bag.border.border_color.clone()),
        box_shadow: box_shadow_value(&bag.shadow),
        ..Default::default()
    };

    let hover = bag.hover.hover_effect.then(|| {
        let mut hover = effect_delta(&bag.hover.hover_effect_type);
        if let Some(hover_icon) = &bag.hover_icon_color {
            hover.color = Some(hover_icon.clone());
        } else if bag.hover.hover_effect_type == "color-shift" {
            hover.color = Some(adjust_color(icon_color, 40));
        }
        if bag.display_style == "buttons" {
            if let Some(hover_background) = &bag.hover_background_color {
                hover.background = Some(hover_background.clone());
            }
        }
        if has_border {
            if let Some(hover_border) = &bag.hover_border_color {
                hover.border_color = Some(hover_border.clone());
            }
        }
        hover
    });

    let active = bag
        .hover
        .hover_effect
        .then(|| press_delta(&bag.hover.hover_effect_type));

    let transition_props = transition_scan(&base, hover.as_ref());
    ResolvedStyle {
        base,
        hover,
        active,
        transition_props,
    }
}

fn text_style(bag: &TextProps) -> ResolvedStyle {
    let base = StyleDecl {
        background: Some(or_default(&bag.background_color, "transparent").to_string()),
        color: Some(or_default(&bag.text_color, "#212529").to_string()),
        border_color: (bag.border.border_style != "none")
            .then(|| bag.border.border_color.clone()),
        box_shadow: box_shadow_value(&bag.shadow),
        ..Default::default()
    };
    shared_hover_only(base, &bag.hover)
}

fn image_style(bag: &ImageProps) -> ResolvedStyle {
    let base = StyleDecl {
        border_color: (bag.border.border_style != "none")
            .then(|| bag.border.border_color.clone()),
        box_shadow: box_shadow_value(&bag.shadow),
        ..Default::default()
    };
    shared_hover_only(base, &bag.hover)
}

/// Text and image elements have no per-kind color overrides; their hover
/// and active states come from the shared effect tables alone.
fn shared_hover_only(base: StyleDecl, hover_props: &HoverProps) -> ResolvedStyle {
    let hover = hover_props
        .hover_effect
        .then(|| effect_delta(&hover_props.hover_effect_type));
    let active = hover_props
        .hover_effect
        .then(|| press_delta(&hover_props.hover_effect_type));
    let transition_props = transition_scan(&base, hover.as_ref());
    ResolvedStyle {
        base,
        hover,
        active,
        transition_props,
    }
}

/// Hover delta, keyed by effect type. `color-shift` has no fixed delta and
/// defers to the explicit color overrides handled per kind.
fn effect_delta(effect_type: &str) -> StyleDecl {
    let mut delta = StyleDecl::default();
    match effect_type {
        "zoom" => delta.transform = Some("scale(1.1)".into()),
        "brighten" => delta.filter = Some("brightness(1.2)".into()),
        "darken" => delta.filter = Some("brightness(0.8)".into()),
        "shadow" => delta.box_shadow = Some("0 5px 15px rgba(0,0,0,0.3)".into()),
        "elevate" => {
            delta.transform = Some("translateY(-3px)".into());
            delta.box_shadow = Some("0 5px 15px rgba(0,0,0,0.2)".into());
        }
        _ => {}
    }
    delta
}

/// Active ("press") delta. Independent of the hover delta so the two layer
/// correctly when both pseudo-states apply.
fn press_delta(effect_type: &str) -> StyleDecl {
    let mut delta = StyleDecl::default();
    match effect_type {
        "zoom" => delta.transform = Some("scale(0.95)".into()),
        "brighten" => delta.filter = Some("brightness(0.9)".into()),
        "darken" => delta.filter = Some("brightness(0.7)".into()),
        "shadow" => delta.box_shadow = Some("0 2px 8px rgba(0,0,0,0.4)".into()),
        "elevate" => {
            delta.transform = Some("translateY(0px)".into());
            delta.box_shadow = Some("0 2px 5px rgba(0,0,0,0.3)".into());
        }
        _ => delta.transform = Some("scale(0.98)".into()),
    }
    delta
}

/// Scan which declaration groups differ between base and hover, in fixed
/// order. Falls back to the default four-property baseline when nothing
/// differs (or there is no hover state at all).
fn transition_scan(base: &StyleDecl, hover: Option<&StyleDecl>) -> Vec<String> {
    let mut props: Vec<String> = Vec::new();
    if let Some(hover) = hover {
        let differs = |b: &Option<String>, h: &Option<String>| h.is_some() && h != b;
        if differs(&base.transform, &hover.transform) {
            props.push("transform".into());
        }
        if differs(&base.filter, &hover.filter) {
            props.push("filter".into());
        }
        if differs(&base.box_shadow, &hover.box_shadow) {
            props.push("box-shadow".into());
        }
        if differs(&base.background, &hover.background) {
            props.push("background-color".into());
        }
        if differs(&base.color, &hover.color) {
            props.push("color".into());
        }
        if differs(&base.border_color, &hover.border_color) {
            props.push("border-color".into());
        }
    }
    if props.is_empty() {
        props = DEFAULT_TRANSITION_PROPS.iter().map(|p| p.to_string()).collect();
    }
    props
}
