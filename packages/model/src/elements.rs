//! Element variants and their property bags.
//!
//! Serialization is internally tagged on `type` with camelCase field names,
//! matching the JSON shape the rest of the application persists. Shared
//! property groups (border, shadow, animation, hover, responsive,
//! accessibility) are flattened into each bag so the wire format stays flat.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One typed, styleable unit on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(flatten)]
    pub props: ElementProps,
}

impl Element {
    /// Per-instance scoping identifier shared by both renderers.
    ///
    /// Unique because element ids are document-unique, so style rules keyed
    /// on it never leak to sibling instances of the same kind.
    pub fn scope_class(&self) -> String {
        format!("{}-{}", self.props.kind(), self.id)
    }
}

/// Closed set of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Button,
    Social,
    Text,
    Image,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Button => "button",
            ElementKind::Social => "social",
            ElementKind::Text => "text",
            ElementKind::Image => "image",
        }
    }

    /// Default property bag for a freshly added element of this kind.
    pub fn default_props(&self) -> ElementProps {
        match self {
            ElementKind::Button => ElementProps::Button(ButtonProps::default()),
            ElementKind::Social => ElementProps::Social(SocialProps::default()),
            ElementKind::Text => ElementProps::Text(TextProps::default()),
            ElementKind::Image => ElementProps::Image(ImageProps::default()),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tagged union of per-kind property bags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementProps {
    Button(ButtonProps),
    Social(SocialProps),
    Text(TextProps),
    Image(ImageProps),
}

impl ElementProps {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementProps::Button(_) => ElementKind::Button,
            ElementProps::Social(_) => ElementKind::Social,
            ElementProps::Text(_) => ElementKind::Text,
            ElementProps::Image(_) => ElementKind::Image,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ElementProps::Button(p) => &p.label,
            ElementProps::Social(p) => &p.label,
            ElementProps::Text(p) => &p.label,
            ElementProps::Image(p) => &p.label,
        }
    }

    pub fn label_mut(&mut self) -> &mut String {
        match self {
            ElementProps::Button(p) => &mut p.label,
            ElementProps::Social(p) => &mut p.label,
            ElementProps::Text(p) => &mut p.label,
            ElementProps::Image(p) => &mut p.label,
        }
    }
}

/// Markup discriminant for buttons. Selects the rendered tag shape only;
/// style derivation is identical across all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    #[default]
    Link,
    Submit,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BorderProps {
    pub border_style: String,
    pub border_width: String,
    pub border_color: String,
    pub border_radius: String,
}

impl Default for BorderProps {
    fn default() -> Self {
        Self {
            border_style: "solid".into(),
            border_width: "1px".into(),
            border_color: "#007bff".into(),
            border_radius: "4px".into(),
        }
    }
}

impl BorderProps {
    fn none() -> Self {
        Self {
            border_style: "none".into(),
            border_width: "0px".into(),
            border_color: "#000000".into(),
            border_radius: "0".into(),
        }
    }
}

/// Shadow toggle plus the sub-fields the assembled value is derived from.
/// `box_shadow == "none"` disables the shadow entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowProps {
    pub box_shadow: String,
    pub box_shadow_color: String,
    pub box_shadow_blur: String,
    pub box_shadow_spread: String,
    pub box_shadow_offset_x: String,
    pub box_shadow_offset_y: String,
}

impl Default for ShadowProps {
    fn default() -> Self {
        Self {
            box_shadow: "none".into(),
            box_shadow_color: "rgba(0,0,0,0.2)".into(),
            box_shadow_blur: "10px".into(),
            box_shadow_spread: "0".into(),
            box_shadow_offset_x: "0".into(),
            box_shadow_offset_y: "4px".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationProps {
    pub animation: String,
    pub animation_duration: String,
    pub animation_delay: String,
    pub animation_easing: String,
}

impl Default for AnimationProps {
    fn default() -> Self {
        Self {
            animation: "none".into(),
            animation_duration: "1s".into(),
            animation_delay: "0s".into(),
            animation_easing: "ease".into(),
        }
    }
}

/// Hover effect toggle and type. Custom hover colors live on the variant
/// bags since their meaning differs per kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoverProps {
    pub hover_effect: bool,
    pub hover_effect_type: String,
    pub hover_transition_duration: String,
}

impl Default for HoverProps {
    fn default() -> Self {
        Self {
            hover_effect: false,
            hover_effect_type: "zoom".into(),
            hover_transition_duration: "0.3s".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsiveProps {
    pub hide_on_mobile: bool,
    pub hide_on_desktop: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_height: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessibilityProps {
    pub aria_label: String,
    pub role: String,
    pub tab_index: i32,
}

impl Default for AccessibilityProps {
    fn default() -> Self {
        Self {
            aria_label: String::new(),
            role: "button".into(),
            tab_index: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonProps {
    pub label: String,
    pub button_text: String,
    pub button_type: ButtonKind,
    pub url: String,
    pub target: String,
    /// Visual style family: filled, outline, text or gradient. Kept as a
    /// string so unknown values survive round-trip; derivation falls back
    /// to filled.
    pub button_style: String,
    pub button_color: String,
    pub text_color: String,
    pub button_size: String,
    pub padding: String,
    pub width: String,
    pub height: String,
    pub full_width: bool,
    pub alignment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub icon_position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_button_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<String>,
    #[serde(flatten)]
    pub border: BorderProps,
    #[serde(flatten)]
    pub shadow: ShadowProps,
    #[serde(flatten)]
    pub animation: AnimationProps,
    #[serde(flatten)]
    pub hover: HoverProps,
    #[serde(flatten)]
    pub responsive: ResponsiveProps,
    #[serde(flatten)]
    pub accessibility: AccessibilityProps,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            label: "New Button".into(),
            button_text: "Click Me".into(),
            button_type: ButtonKind::Link,
            url: "#".into(),
            target: "_self".into(),
            button_style: "filled".into(),
            button_color: "#007bff".into(),
            text_color: "#ffffff".into(),
            button_size: "md".into(),
            padding: "6px 12px".into(),
            width: "auto".into(),
            height: "auto".into(),
            full_width: false,
            alignment: "left".into(),
            icon: None,
            icon_position: "left".into(),
            hover_button_color: None,
            hover_text_color: None,
            hover_border_color: None,
            border: BorderProps::default(),
            shadow: ShadowProps::default(),
            animation: AnimationProps::default(),
            hover: HoverProps::default(),
            responsive: ResponsiveProps::default(),
            accessibility: AccessibilityProps::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub label: String,
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            platform: "linkedin".into(),
            url: String::new(),
            label: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialProps {
    pub label: String,
    pub links: Vec<SocialLink>,
    /// `icons` renders bare icon links, `buttons` renders pill buttons.
    pub display_style: String,
    pub icon_size: String,
    pub icon_color: String,
    pub background_color: String,
    pub spacing: String,
    pub alignment: String,
    pub width: String,
    pub height: String,
    pub margin: String,
    pub padding: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_icon_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<String>,
    #[serde(flatten)]
    pub border: BorderProps,
    #[serde(flatten)]
    pub shadow: ShadowProps,
    #[serde(flatten)]
    pub animation: AnimationProps,
    #[serde(flatten)]
    pub hover: HoverProps,
    #[serde(flatten)]
    pub responsive: ResponsiveProps,
    #[serde(flatten)]
    pub accessibility: AccessibilityProps,
}

impl Default for SocialProps {
    fn default() -> Self {
        Self {
            label: "New Social".into(),
            links: vec![SocialLink::default()],
            display_style: "icons".into(),
            icon_size: "md".into(),
            icon_color: "#212529".into(),
            background_color: "transparent".into(),
            spacing: "1rem".into(),
            alignment: "left".into(),
            width: "100%".into(),
            height: "auto".into(),
            margin: "1rem 0".into(),
            padding: "0".into(),
            hover_icon_color: None,
            hover_background_color: None,
            hover_border_color: None,
            border: BorderProps::none(),
            shadow: ShadowProps::default(),
            animation: AnimationProps::default(),
            hover: HoverProps::default(),
            responsive: ResponsiveProps::default(),
            accessibility: AccessibilityProps {
                role: "navigation".into(),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextProps {
    pub label: String,
    pub content: String,
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
    pub text_color: String,
    pub background_color: String,
    pub alignment: String,
    #[serde(flatten)]
    pub border: BorderProps,
    #[serde(flatten)]
    pub shadow: ShadowProps,
    #[serde(flatten)]
    pub animation: AnimationProps,
    #[serde(flatten)]
    pub hover: HoverProps,
    #[serde(flatten)]
    pub responsive: ResponsiveProps,
    #[serde(flatten)]
    pub accessibility: AccessibilityProps,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            label: "New Text".into(),
            content: "Your text here".into(),
            font_size: "16px".into(),
            font_weight: "400".into(),
            line_height: "1.5".into(),
            text_color: "#212529".into(),
            background_color: "transparent".into(),
            alignment: "left".into(),
            border: BorderProps::none(),
            shadow: ShadowProps::default(),
            animation: AnimationProps::default(),
            hover: HoverProps::default(),
            responsive: ResponsiveProps::default(),
            accessibility: AccessibilityProps {
                role: "region".into(),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProps {
    pub label: String,
    pub src: String,
    pub alt: String,
    pub width: String,
    pub height: String,
    pub object_fit: String,
    pub alignment: String,
    pub opacity: f64,
    #[serde(flatten)]
    pub border: BorderProps,
    #[serde(flatten)]
    pub shadow: ShadowProps,
    #[serde(flatten)]
    pub animation: AnimationProps,
    #[serde(flatten)]
    pub hover: HoverProps,
    #[serde(flatten)]
    pub responsive: ResponsiveProps,
    #[serde(flatten)]
    pub accessibility: AccessibilityProps,
}

impl Default for ImageProps {
    fn default() -> Self {
        Self {
            label: "New Image".into(),
            src: String::new(),
            alt: String::new(),
            width: "100%".into(),
            height: "auto".into(),
            object_fit: "cover".into(),
            alignment: "center".into(),
            opacity: 1.0,
            border: BorderProps::none(),
            shadow: ShadowProps::default(),
            animation: AnimationProps::default(),
            hover: HoverProps::default(),
            responsive: ResponsiveProps::default(),
            accessibility: AccessibilityProps {
                role: "img".into(),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factories_match_kind() {
        for kind in [
            ElementKind::Button,
            ElementKind::Social,
            ElementKind::Text,
            ElementKind::Image,
        ] {
            assert_eq!(kind.default_props().kind(), kind);
        }
    }

    #[test]
    fn button_serializes_flat_with_type_tag() {
        let element = Element {
            id: "element-abc-1".into(),
            props: ElementProps::Button(ButtonProps::default()),
        };

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "button");
        assert_eq!(json["id"], "element-abc-1");
        // Flattened groups stay at the top level.
        assert_eq!(json["buttonColor"], "#007bff");
        assert_eq!(json["borderRadius"], "4px");
        assert_eq!(json["boxShadow"], "none");
        assert_eq!(json["hoverEffect"], false);
    }

    #[test]
    fn element_round_trips_through_json() {
        let mut props = ButtonProps::default();
        props.button_style = "outline".into();
        props.hover.hover_effect = true;
        props.hover_button_color = Some("#ff0000".into());

        let element = Element {
            id: "element-abc-2".into(),
            props: ElementProps::Button(props),
        };

        let json = serde_json::to_string(&element).unwrap();
        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(element, back);
    }

    #[test]
    fn unknown_button_style_survives_round_trip() {
        let json = r#"{"id":"element-1","type":"button","buttonStyle":"sparkle"}"#;
        let element: Element = serde_json::from_str(json).unwrap();
        match &element.props {
            ElementProps::Button(p) => assert_eq!(p.button_style, "sparkle"),
            other => panic!("expected button, got {:?}", other.kind()),
        }
    }

    #[test]
    fn scope_class_includes_kind_and_id() {
        let element = Element {
            id: "element-9".into(),
            props: ElementKind::Social.default_props(),
        };
        assert_eq!(element.scope_class(), "social-element-9");
    }
}
