//! Cross-renderer equivalence: the published template must carry exactly
//! the styling the design surface shows, for every element kind and
//! pseudo-state.

use engage_canvas::{render_element, RenderOptions, VNode};
use engage_model::{
    ButtonProps, Element, ElementProps, ImageProps, PageDocument, SocialProps, TextProps,
};
use engage_template::{render_document_template, render_element_template};

/// The node carrying the instance scope class, wherever it sits in the tree.
fn find_scoped<'a>(node: &'a VNode, scope: &str) -> Option<&'a VNode> {
    match node {
        VNode::Element {
            classes, children, ..
        } => {
            if classes.iter().any(|c| c == scope) {
                return Some(node);
            }
            children.iter().find_map(|child| find_scoped(child, scope))
        }
        VNode::Text { .. } => None,
    }
}

fn styles_of(node: &VNode) -> &[(String, String)] {
    match node {
        VNode::Element { styles, .. } => styles,
        VNode::Text { .. } => panic!("expected element"),
    }
}

fn assert_equivalent(element: &Element) {
    let fragment = render_element(element, &RenderOptions::default());
    let template = render_element_template(element);
    let scope = element.scope_class();

    // Every inline declaration the canvas shows appears in the template's
    // inline style.
    let scoped = find_scoped(&fragment.node, &scope)
        .unwrap_or_else(|| panic!("no node scoped {}", scope));
    for (property, value) in styles_of(scoped) {
        let declaration = format!("{}: {};", property, value);
        assert!(
            template.contains(&declaration),
            "{}: missing inline `{}`\n{}",
            scope,
            declaration,
            template
        );
    }

    // Every pseudo-state declaration appears forced in the style block.
    for rule in &fragment.rules {
        assert!(
            template.contains(&format!("{} {{", rule.selector)),
            "{}: missing rule `{}`",
            scope,
            rule.selector
        );
        for (property, value) in &rule.declarations {
            let declaration = format!("{}: {} !important;", property, value);
            assert!(
                template.contains(&declaration),
                "{}: missing forced `{}`\n{}",
                scope,
                declaration,
                template
            );
        }
    }
}

#[test]
fn button_variants_render_identically() {
    for style in ["filled", "outline", "text", "gradient"] {
        let mut props = ButtonProps::default();
        props.button_style = style.into();
        props.hover.hover_effect = true;
        props.hover.hover_effect_type = "elevate".into();
        assert_equivalent(&Element {
            id: format!("element-{}", style),
            props: ElementProps::Button(props),
        });
    }
}

#[test]
fn custom_hover_colors_render_identically() {
    let mut props = ButtonProps::default();
    props.button_color = "#228b22".into();
    props.hover.hover_effect = true;
    props.hover.hover_effect_type = "color-shift".into();
    props.hover_text_color = Some("#f0f0f0".into());
    props.shadow.box_shadow = "custom".into();
    assert_equivalent(&Element {
        id: "element-custom".into(),
        props: ElementProps::Button(props),
    });
}

#[test]
fn social_renders_identically() {
    let mut props = SocialProps::default();
    props.display_style = "buttons".into();
    props.hover.hover_effect = true;
    props.hover_icon_color = Some("#0a66c2".into());
    assert_equivalent(&Element {
        id: "element-social".into(),
        props: ElementProps::Social(props),
    });
}

#[test]
fn text_and_image_render_identically() {
    let mut text = TextProps::default();
    text.hover.hover_effect = true;
    text.hover.hover_effect_type = "shadow".into();
    assert_equivalent(&Element {
        id: "element-text".into(),
        props: ElementProps::Text(text),
    });

    let mut image = ImageProps::default();
    image.src = "https://example.com/a.png".into();
    image.opacity = 0.8;
    image.hover.hover_effect = true;
    image.hover.hover_effect_type = "zoom".into();
    assert_equivalent(&Element {
        id: "element-image".into(),
        props: ElementProps::Image(image),
    });
}

#[test]
fn document_rules_all_appear_in_the_template() {
    let mut doc = PageDocument::new("Landing");
    let mut button = ButtonProps::default();
    button.hover.hover_effect = true;
    doc.sections[0].elements.push(Element {
        id: "element-1".into(),
        props: ElementProps::Button(button),
    });
    let mut social = SocialProps::default();
    social.hover.hover_effect = true;
    doc.sections[0].elements.push(Element {
        id: "element-2".into(),
        props: ElementProps::Social(social),
    });

    let fragment = engage_canvas::render_document(&doc, &RenderOptions::default());
    let template = render_document_template(&doc);
    for rule in &fragment.rules {
        assert!(template.contains(&format!("{} {{", rule.selector)));
        for (property, value) in &rule.declarations {
            assert!(template.contains(&format!("{}: {} !important;", property, value)));
        }
    }
}
