//! Interactive canvas rendering.
//!
//! Builds the editable representation of elements for the live design
//! surface. All colors, shadows, hover and active deltas come from
//! `engage_style::derive_style`; this module only decides markup shape and
//! static layout styling.

use crate::vnode::{CanvasFragment, StyleRule, VNode};
use engage_model::{
    ButtonKind, ButtonProps, Element, ElementProps, ImageProps, PageDocument, Section,
    SocialProps, TextProps,
};
use engage_style::{
    button_font_size, derive_style, social_icon_size, ResolvedStyle, Simulate,
    ACTIVE_TRANSITION, BASE_TRANSITION,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Statically paint the hover state instead of attaching `:hover`
    /// rules. Used for editing review, where no real pointer hovers the
    /// surface.
    pub simulate_hover: bool,
    pub simulate_active: bool,
}

impl RenderOptions {
    fn simulate(&self) -> Simulate {
        Simulate {
            hover: self.simulate_hover,
            active: self.simulate_active,
        }
    }
}

/// Render one element for the design surface.
pub fn render_element(element: &Element, options: &RenderOptions) -> CanvasFragment {
    let style = derive_style(&element.props, options.simulate());
    match &element.props {
        ElementProps::Button(bag) => render_button(element, bag, &style, options),
        ElementProps::Social(bag) => render_social(element, bag, &style, options),
        ElementProps::Text(bag) => render_text(element, bag, &style, options),
        ElementProps::Image(bag) => render_image(element, bag, &style, options),
    }
}

/// Render the whole page: sections and elements in order, honoring the
/// render-only settings toggles and the page appearance theme.
pub fn render_document(doc: &PageDocument, options: &RenderOptions) -> CanvasFragment {
    let appearance = &doc.appearance;
    let mut root = VNode::element("div")
        .with_class("page-canvas")
        .with_style("background-color", &appearance.background_color)
        .with_style("font-family", &appearance.font_family)
        .with_style("color", &appearance.text_color)
        .with_style("max-width", &appearance.width)
        .with_style("margin", "0 auto")
        .with_style("border-radius", &appearance.border_radius)
        .with_style("box-shadow", &appearance.box_shadow);
    if !appearance.background_image.is_empty() {
        root = root.with_style(
            "background-image",
            format!("url({})", appearance.background_image),
        );
    }

    let mut rules = Vec::new();
    for section in &doc.sections {
        let (node, section_rules) = render_section(section, doc, options);
        root = root.with_child(node);
        rules.extend(section_rules);
    }

    if doc.settings.show_submit_button || doc.settings.show_reset_button {
        root = root.with_child(render_action_row(doc));
    }

    if !doc.settings.footer_text.is_empty() {
        root = root.with_child(
            VNode::element("div")
                .with_class("page-footer")
                .with_child(VNode::text(&doc.settings.footer_text)),
        );
    }

    CanvasFragment { node: root, rules }
}

fn render_action_row(doc: &PageDocument) -> VNode {
    let mut row = VNode::element("div")
        .with_class("page-actions")
        .with_style("text-align", "center")
        .with_style("margin-top", &doc.appearance.element_spacing);
    if doc.settings.show_submit_button {
        row = row.with_child(
            VNode::element("button")
                .with_class("page-submit")
                .with_attr("type", "submit")
                .with_style("background-color", &doc.appearance.primary_color)
                .with_style("color", "#ffffff")
                .with_child(VNode::text(&doc.settings.submit_button_text)),
        );
    }
    if doc.settings.show_reset_button {
        row = row.with_child(
            VNode::element("button")
                .with_class("page-reset")
                .with_attr("type", "reset")
                .with_style("background-color", &doc.appearance.secondary_color)
                .with_style("color", "#ffffff")
                .with_child(VNode::text(&doc.settings.reset_button_text)),
        );
    }
    row
}

fn render_section(
    section: &Section,
    doc: &PageDocument,
    options: &RenderOptions,
) -> (VNode, Vec<StyleRule>) {
    let settings = &doc.settings;
    let appearance = &doc.appearance;

    let mut node = VNode::element("div").with_class("page-section");
    if settings.show_section_wrappers {
        node = node
            .with_style("margin-bottom", &appearance.element_spacing)
            .with_style("padding-bottom", &appearance.element_spacing)
            .with_style(
                "border-bottom",
                format!("1px solid {}", appearance.section_divider_color),
            );
    }

    if settings.show_section_titles {
        node = node.with_child(
            VNode::element("h2")
                .with_class("section-title")
                .with_style("color", &appearance.section_title_color)
                .with_style("text-align", &appearance.header_alignment)
                .with_child(VNode::text(&section.title)),
        );
    }
    if settings.show_section_text {
        if let Some(description) = &section.description {
            if !description.is_empty() {
                node = node.with_child(
                    VNode::element("p")
                        .with_class("section-description")
                        .with_child(VNode::text(description)),
                );
            }
        }
    }

    let mut rules = Vec::new();
    for element in &section.elements {
        let fragment = render_element(element, options);
        let child = if settings.show_element_wrappers {
            VNode::element("div")
                .with_class("page-element")
                .with_style("margin-bottom", &appearance.element_spacing)
                .with_child(fragment.node)
        } else {
            fragment.node
        };
        node = node.with_child(child);
        rules.extend(fragment.rules);
    }

    (node, rules)
}

fn render_button(
    element: &Element,
    bag: &ButtonProps,
    style: &ResolvedStyle,
    options: &RenderOptions,
) -> CanvasFragment {
    let scope = element.scope_class();

    let mut node = match bag.button_type {
        ButtonKind::Link => VNode::element("a")
            .with_attr("href", or_str(&bag.url, "#"))
            .with_attr("target", or_str(&bag.target, "_self")),
        ButtonKind::Submit => VNode::element("button").with_attr("type", "submit"),
        ButtonKind::Reset => VNode::element("button").with_attr("type", "reset"),
    };
    node = node.with_class("button-element").with_class(&scope);
    node = responsive_classes(node, bag.responsive.hide_on_mobile, bag.responsive.hide_on_desktop);

    let aria_label = or_str(&bag.accessibility.aria_label, or_str(&bag.button_text, "Button"));
    node = node
        .with_attr("aria-label", aria_label)
        .with_attr("role", &bag.accessibility.role)
        .with_attr("tabindex", bag.accessibility.tab_index.to_string());

    node = node
        .with_style("display", "inline-block")
        .with_style("font-weight", "400")
        .with_style("text-align", "center")
        .with_style("vertical-align", "middle")
        .with_style("user-select", "none")
        .with_style("padding", &bag.padding)
        .with_style("font-size", button_font_size(&bag.button_size))
        .with_style("line-height", "1.5")
        .with_style("text-decoration", "none")
        .with_style("cursor", "pointer");

    if bag.full_width {
        node = node.with_style("width", "100%");
    } else if bag.width != "auto" && !bag.width.is_empty() {
        node = node.with_style("width", &bag.width);
    }
    if bag.height != "auto" && !bag.height.is_empty() {
        node = node.with_style("height", &bag.height);
    }

    node = border_styles(node, &bag.border);
    node = node.with_styles(style.base.entries());
    node = animation_style(node, &bag.animation);
    node = node.with_style("transition", BASE_TRANSITION);

    node = node.with_children(button_content(bag));

    let wrapper = VNode::element("div")
        .with_style("text-align", or_str(&bag.alignment, "left"))
        .with_style("width", "100%")
        .with_child(node);

    CanvasFragment {
        node: wrapper,
        rules: pseudo_rules(&scope, style, &bag.hover.hover_transition_duration, options),
    }
}

fn button_content(bag: &ButtonProps) -> Vec<VNode> {
    let text = or_str(&bag.button_text, "Click Me").to_string();
    let Some(icon) = bag.icon.as_deref().filter(|i| !i.is_empty()) else {
        return vec![VNode::text(text)];
    };

    // The design surface draws icons as bracketed names; the host swaps in
    // the real glyph set.
    let icon_node = |margin: &str| {
        VNode::element("span")
            .with_style(margin.to_string(), "5px")
            .with_child(VNode::text(format!("[{}]", icon)))
    };
    if bag.icon_position == "right" {
        vec![VNode::text(text), icon_node("margin-left")]
    } else {
        vec![icon_node("margin-right"), VNode::text(text)]
    }
}

fn render_social(
    element: &Element,
    bag: &SocialProps,
    style: &ResolvedStyle,
    options: &RenderOptions,
) -> CanvasFragment {
    let scope = element.scope_class();

    let mut node = VNode::element("div")
        .with_class("social-element")
        .with_class(&scope);
    node = responsive_classes(node, bag.responsive.hide_on_mobile, bag.responsive.hide_on_desktop);
    node = node
        .with_attr("role", &bag.accessibility.role)
        .with_style("display", "flex")
        .with_style("flex-wrap", "wrap")
        .with_style("gap", or_str(&bag.spacing, "1rem"))
        .with_style("justify-content", justify(&bag.alignment))
        .with_style("width", or_str(&bag.width, "100%"))
        .with_style("height", or_str(&bag.height, "auto"))
        .with_style("margin", or_str(&bag.margin, "1rem 0"))
        .with_style("padding", or_str(&bag.padding, "0"));
    node = border_styles(node, &bag.border);
    node = node.with_styles(style.base.entries());
    node = animation_style(node, &bag.animation);
    node = node.with_style("transition", BASE_TRANSITION);

    for link in &bag.links {
        let mut anchor = VNode::element("a")
            .with_class("social-link")
            .with_attr("href", or_str(&link.url, "#"))
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener")
            .with_attr("aria-label", or_str(&link.label, &link.platform))
            .with_style("color", "inherit")
            .with_style("font-size", social_icon_size(&bag.icon_size))
            .with_style("text-decoration", "none");
        if bag.display_style == "buttons" {
            anchor = anchor
                .with_style("padding", "0.5rem 1rem")
                .with_style("border-radius", "4px")
                .with_style("background", "rgba(0,0,0,0.05)");
        }
        anchor = anchor.with_child(VNode::text(format!("[{}]", link.platform)));
        node = node.with_child(anchor);
    }

    let mut rules = Vec::new();
    if !options.simulate_hover && !options.simulate_active {
        // Hover applies per link, still keyed by the instance scope.
        if let Some(hover) = &style.hover {
            rules.push(rule(
                format!(".{} a:hover", scope),
                hover,
                Some(&style.transition_value(&bag.hover.hover_transition_duration)),
            ));
        }
        if let Some(active) = &style.active {
            rules.push(rule(
                format!(".{} a:active", scope),
                active,
                Some(ACTIVE_TRANSITION),
            ));
        }
    }

    CanvasFragment { node, rules }
}

fn render_text(
    element: &Element,
    bag: &TextProps,
    style: &ResolvedStyle,
    options: &RenderOptions,
) -> CanvasFragment {
    let scope = element.scope_class();

    let mut node = VNode::element("div")
        .with_class("text-element")
        .with_class(&scope);
    node = responsive_classes(node, bag.responsive.hide_on_mobile, bag.responsive.hide_on_desktop);
    node = node
        .with_style("font-size", &bag.font_size)
        .with_style("font-weight", &bag.font_weight)
        .with_style("line-height", &bag.line_height)
        .with_style("text-align", or_str(&bag.alignment, "left"));
    node = border_styles(node, &bag.border);
    node = node.with_styles(style.base.entries());
    node = animation_style(node, &bag.animation);
    node = node.with_style("transition", BASE_TRANSITION);
    node = node.with_child(VNode::text(&bag.content));

    CanvasFragment {
        node,
        rules: pseudo_rules(&scope, style, &bag.hover.hover_transition_duration, options),
    }
}

fn render_image(
    element: &Element,
    bag: &ImageProps,
    style: &ResolvedStyle,
    options: &RenderOptions,
) -> CanvasFragment {
    let scope = element.scope_class();

    let mut img = VNode::element("img")
        .with_class("image-element")
        .with_class(&scope)
        .with_attr("src", &bag.src)
        .with_attr("alt", &bag.alt);
    img = responsive_classes(img, bag.responsive.hide_on_mobile, bag.responsive.hide_on_desktop);
    img = img
        .with_style("width", &bag.width)
        .with_style("height", &bag.height)
        .with_style("object-fit", &bag.object_fit);
    if bag.opacity < 1.0 {
        img = img.with_style("opacity", format!("{}", bag.opacity));
    }
    img = border_styles(img, &bag.border);
    img = img.with_styles(style.base.entries());
    img = animation_style(img, &bag.animation);
    img = img.with_style("transition", BASE_TRANSITION);

    let wrapper = VNode::element("div")
        .with_style("text-align", or_str(&bag.alignment, "center"))
        .with_child(img);

    CanvasFragment {
        node: wrapper,
        rules: pseudo_rules(&scope, style, &bag.hover.hover_transition_duration, options),
    }
}

/// Hover/active rules for one instance. Skipped entirely while either
/// pseudo-state is simulated, since the deltas are already merged into the
/// inline styles.
fn pseudo_rules(
    scope: &str,
    style: &ResolvedStyle,
    transition_duration: &str,
    options: &RenderOptions,
) -> Vec<StyleRule> {
    if options.simulate_hover || options.simulate_active {
        return Vec::new();
    }
    let mut rules = Vec::new();
    if let Some(hover) = &style.hover {
        rules.push(rule(
            format!(".{}:hover", scope),
            hover,
            Some(&style.transition_value(transition_duration)),
        ));
    }
    if let Some(active) = &style.active {
        rules.push(rule(
            format!(".{}:active", scope),
            active,
            Some(ACTIVE_TRANSITION),
        ));
    }
    rules
}

fn rule(selector: String, decl: &engage_style::StyleDecl, transition: Option<&str>) -> StyleRule {
    let mut declarations: Vec<(String, String)> = decl
        .entries()
        .into_iter()
        .map(|(p, v)| (p.to_string(), v.to_string()))
        .collect();
    if let Some(transition) = transition {
        declarations.push(("transition".into(), transition.to_string()));
    }
    StyleRule {
        selector,
        declarations,
    }
}

fn border_styles(node: VNode, border: &engage_model::BorderProps) -> VNode {
    if border.border_style == "none" {
        node.with_style("border-style", "none")
            .with_style("border-radius", &border.border_radius)
    } else {
        node.with_style("border-width", &border.border_width)
            .with_style("border-style", &border.border_style)
            .with_style("border-radius", &border.border_radius)
    }
}

fn animation_style(node: VNode, animation: &engage_model::AnimationProps) -> VNode {
    if animation.animation == "none" || animation.animation.is_empty() {
        return node;
    }
    node.with_style(
        "animation",
        format!(
            "{} {} {} {}",
            animation.animation,
            animation.animation_duration,
            animation.animation_easing,
            animation.animation_delay
        ),
    )
}

fn responsive_classes(mut node: VNode, hide_on_mobile: bool, hide_on_desktop: bool) -> VNode {
    if hide_on_mobile {
        node = node.with_class("hide-on-mobile");
    }
    if hide_on_desktop {
        node = node.with_class("hide-on-desktop");
    }
    node
}

fn justify(alignment: &str) -> &'static str {
    match alignment {
        "center" => "center",
        "right" => "flex-end",
        _ => "flex-start",
    }
}

fn or_str<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engage_model::ElementKind;

    fn button_element(configure: impl FnOnce(&mut ButtonProps)) -> Element {
        let mut props = ButtonProps::default();
        configure(&mut props);
        Element {
            id: "element-abc-1".into(),
            props: ElementProps::Button(props),
        }
    }

    fn only_child(node: &VNode) -> &VNode {
        match node {
            VNode::Element { children, .. } => {
                assert_eq!(children.len(), 1);
                &children[0]
            }
            VNode::Text { .. } => panic!("expected element"),
        }
    }

    fn tag_of(node: &VNode) -> &str {
        match node {
            VNode::Element { tag, .. } => tag,
            VNode::Text { .. } => panic!("expected element"),
        }
    }

    fn classes_of(node: &VNode) -> &[String] {
        match node {
            VNode::Element { classes, .. } => classes,
            VNode::Text { .. } => panic!("expected element"),
        }
    }

    #[test]
    fn button_type_selects_markup_only() {
        let opts = RenderOptions::default();
        let link = render_element(&button_element(|_| {}), &opts);
        let submit = render_element(
            &button_element(|b| b.button_type = ButtonKind::Submit),
            &opts,
        );

        let link_node = only_child(&link.node);
        let submit_node = only_child(&submit.node);

        assert_eq!(tag_of(link_node), "a");
        assert_eq!(link_node.attr("href"), Some("#"));
        assert_eq!(tag_of(submit_node), "button");
        assert_eq!(submit_node.attr("type"), Some("submit"));

        // Identical styling across markup shapes.
        for prop in ["background", "color", "border-color", "padding", "font-size"] {
            assert_eq!(link_node.style(prop), submit_node.style(prop), "{}", prop);
        }
    }

    #[test]
    fn filled_and_outline_differ_only_in_palette() {
        let opts = RenderOptions::default();
        let filled = render_element(&button_element(|_| {}), &opts);
        let outline = render_element(
            &button_element(|b| b.button_style = "outline".into()),
            &opts,
        );

        let filled = only_child(&filled.node);
        let outline = only_child(&outline.node);

        assert_eq!(filled.style("background"), Some("#007bff"));
        assert_eq!(filled.style("color"), Some("#ffffff"));
        assert_eq!(outline.style("background"), Some("transparent"));
        assert_eq!(outline.style("color"), Some("#007bff"));
        assert_eq!(outline.style("border-color"), Some("#007bff"));
        assert_eq!(filled.style("padding"), outline.style("padding"));
    }

    #[test]
    fn hover_rules_are_scoped_to_the_instance() {
        let fragment = render_element(
            &button_element(|b| b.hover.hover_effect = true),
            &RenderOptions::default(),
        );

        assert_eq!(fragment.rules.len(), 2);
        let hover = &fragment.rules[0];
        assert_eq!(hover.selector, ".button-element-abc-1:hover");
        assert!(hover
            .declarations
            .iter()
            .any(|(p, v)| p == "transform" && v == "scale(1.1)"));
        assert!(hover
            .declarations
            .iter()
            .any(|(p, v)| p == "transition" && v.contains("0.3s")));

        let active = &fragment.rules[1];
        assert_eq!(active.selector, ".button-element-abc-1:active");
        assert!(active
            .declarations
            .iter()
            .any(|(p, v)| p == "transform" && v == "scale(0.95)"));
        assert!(active
            .declarations
            .iter()
            .any(|(p, v)| p == "transition" && v == ACTIVE_TRANSITION));
    }

    #[test]
    fn simulated_hover_paints_inline_and_emits_no_rules() {
        let fragment = render_element(
            &button_element(|b| b.hover.hover_effect = true),
            &RenderOptions {
                simulate_hover: true,
                simulate_active: false,
            },
        );

        assert!(fragment.rules.is_empty());
        let node = only_child(&fragment.node);
        assert_eq!(node.style("transform"), Some("scale(1.1)"));
    }

    #[test]
    fn simulated_active_paints_inline_and_emits_no_rules() {
        let fragment = render_element(
            &button_element(|b| b.hover.hover_effect = true),
            &RenderOptions {
                simulate_hover: false,
                simulate_active: true,
            },
        );

        // The press delta lands inline only; emitting the pseudo rules too
        // would apply it twice.
        assert!(fragment.rules.is_empty());
        let node = only_child(&fragment.node);
        assert_eq!(node.style("transform"), Some("scale(0.95)"));
    }

    #[test]
    fn no_hover_effect_means_no_rules() {
        let fragment = render_element(&button_element(|_| {}), &RenderOptions::default());
        assert!(fragment.rules.is_empty());
    }

    #[test]
    fn responsive_flags_become_classes() {
        let fragment = render_element(
            &button_element(|b| {
                b.responsive.hide_on_mobile = true;
                b.responsive.hide_on_desktop = true;
            }),
            &RenderOptions::default(),
        );
        let classes = classes_of(only_child(&fragment.node));
        assert!(classes.iter().any(|c| c == "hide-on-mobile"));
        assert!(classes.iter().any(|c| c == "hide-on-desktop"));
    }

    #[test]
    fn aria_label_falls_back_to_button_text() {
        let opts = RenderOptions::default();
        let labelled = render_element(
            &button_element(|b| b.accessibility.aria_label = "Buy now".into()),
            &opts,
        );
        assert_eq!(only_child(&labelled.node).attr("aria-label"), Some("Buy now"));

        let unlabelled = render_element(&button_element(|_| {}), &opts);
        assert_eq!(
            only_child(&unlabelled.node).attr("aria-label"),
            Some("Click Me")
        );
    }

    #[test]
    fn icon_position_orders_children() {
        let fragment = render_element(
            &button_element(|b| {
                b.icon = Some("star".into());
                b.icon_position = "right".into();
            }),
            &RenderOptions::default(),
        );
        let VNode::Element { children, .. } = only_child(&fragment.node) else {
            panic!("expected element");
        };
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[0], VNode::Text { content } if content == "Click Me"));
        assert_eq!(tag_of(&children[1]), "span");
    }

    #[test]
    fn social_links_render_with_scoped_link_hover() {
        let mut props = SocialProps::default();
        props.links.push(engage_model::SocialLink {
            platform: "github".into(),
            url: "https://github.com/example".into(),
            label: String::new(),
        });
        props.hover.hover_effect = true;
        props.hover.hover_effect_type = "color-shift".into();
        let element = Element {
            id: "element-abc-2".into(),
            props: ElementProps::Social(props),
        };

        let fragment = render_element(&element, &RenderOptions::default());
        let VNode::Element { children, .. } = &fragment.node else {
            panic!("expected element");
        };
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].attr("aria-label"), Some("github"));
        assert_eq!(
            children[1].attr("href"),
            Some("https://github.com/example")
        );

        assert_eq!(fragment.rules[0].selector, ".social-element-abc-2 a:hover");
        // color-shift brightens the icon color.
        assert!(fragment.rules[0]
            .declarations
            .iter()
            .any(|(p, v)| p == "color" && v == &engage_style::adjust_color("#212529", 40)));
    }

    #[test]
    fn image_renders_src_alt_and_opacity() {
        let mut props = ImageProps::default();
        props.src = "https://example.com/a.png".into();
        props.alt = "A picture".into();
        props.opacity = 0.5;
        let element = Element {
            id: "element-abc-3".into(),
            props: ElementProps::Image(props),
        };

        let fragment = render_element(&element, &RenderOptions::default());
        let img = only_child(&fragment.node);
        assert_eq!(tag_of(img), "img");
        assert_eq!(img.attr("src"), Some("https://example.com/a.png"));
        assert_eq!(img.attr("alt"), Some("A picture"));
        assert_eq!(img.style("opacity"), Some("0.5"));
    }

    fn doc_with_elements() -> PageDocument {
        let mut doc = PageDocument::new("Landing");
        doc.sections[0].elements.push(Element {
            id: "element-1".into(),
            props: ElementKind::Button.default_props(),
        });
        doc.sections[0].elements.push(Element {
            id: "element-2".into(),
            props: ElementKind::Text.default_props(),
        });
        doc
    }

    #[test]
    fn document_render_honors_section_toggles() {
        let mut doc = doc_with_elements();
        let opts = RenderOptions::default();

        let with_titles = render_document(&doc, &opts);
        let VNode::Element { children, .. } = &with_titles.node else {
            panic!("expected element");
        };
        let VNode::Element {
            children: section_children,
            ..
        } = &children[0]
        else {
            panic!("expected element");
        };
        assert_eq!(tag_of(&section_children[0]), "h2");

        doc.settings.show_section_titles = false;
        doc.settings.show_section_text = false;
        let without_titles = render_document(&doc, &opts);
        let VNode::Element { children, .. } = &without_titles.node else {
            panic!("expected element");
        };
        let VNode::Element {
            children: section_children,
            ..
        } = &children[0]
        else {
            panic!("expected element");
        };
        // Only the two element wrappers remain.
        assert_eq!(section_children.len(), 2);
        assert!(classes_of(&section_children[0]).iter().any(|c| c == "page-element"));
    }

    #[test]
    fn document_render_applies_appearance_theme() {
        let mut doc = doc_with_elements();
        doc.appearance.background_color = "#f8f9fa".into();
        doc.appearance.width = "600px".into();
        doc.settings.footer_text = "All rights reserved".into();
        doc.settings.show_submit_button = true;

        let fragment = render_document(&doc, &RenderOptions::default());
        assert_eq!(fragment.node.style("background-color"), Some("#f8f9fa"));
        assert_eq!(fragment.node.style("max-width"), Some("600px"));

        let VNode::Element { children, .. } = &fragment.node else {
            panic!("expected element");
        };
        // Section, action row, footer.
        assert_eq!(children.len(), 3);
        assert!(classes_of(&children[1]).iter().any(|c| c == "page-actions"));
        assert!(classes_of(&children[2]).iter().any(|c| c == "page-footer"));
    }

    #[test]
    fn document_render_collects_element_rules() {
        let mut doc = doc_with_elements();
        match &mut doc.sections[0].elements[0].props {
            ElementProps::Button(p) => p.hover.hover_effect = true,
            _ => unreachable!(),
        }

        let fragment = render_document(&doc, &RenderOptions::default());
        assert_eq!(fragment.rules.len(), 2);
        assert!(fragment.rules[0].selector.starts_with(".button-element-1"));
    }
}
