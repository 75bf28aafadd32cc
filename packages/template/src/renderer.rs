//! Textual template rendering.
//!
//! Produces the self-contained fragments embedded into published pages. The
//! markup mirrors the design surface shape for shape, and every dynamic
//! declaration comes from the same `derive_style` call, so the published
//! page looks identical to the canvas preview. Pseudo-state declarations
//! are forced with `!important` so host-page theme CSS cannot override
//! them.

use crate::escape::{escape_html, sanitize_style_value};
use crate::writer::{TemplateOptions, TemplateWriter};
use engage_model::{
    AnimationProps, BorderProps, ButtonKind, ButtonProps, Element, ElementProps, ImageProps,
    PageDocument, ResponsiveProps, Section, SocialProps, TextProps,
};
use engage_style::{
    button_font_size, derive_style, social_icon_size, ResolvedStyle, Simulate, StyleDecl,
    ACTIVE_TRANSITION, BASE_TRANSITION,
};

/// Render one element as a standalone fragment: a `<style>` block for its
/// pseudo-states (when it has any) followed by the markup.
pub fn render_element_template(element: &Element) -> String {
    render_element_template_with(element, TemplateOptions::default())
}

pub fn render_element_template_with(element: &Element, options: TemplateOptions) -> String {
    let mut w = TemplateWriter::new(options);
    write_element(&mut w, element);
    w.get_output()
}

/// Render the whole page as one fragment, honoring the settings toggles and
/// the appearance theme.
pub fn render_document_template(doc: &PageDocument) -> String {
    render_document_template_with(doc, TemplateOptions::default())
}

pub fn render_document_template_with(doc: &PageDocument, options: TemplateOptions) -> String {
    let mut w = TemplateWriter::new(options);
    let appearance = &doc.appearance;

    let mut page = vec![
        pair("background-color", &appearance.background_color),
        pair("font-family", &appearance.font_family),
        pair("color", &appearance.text_color),
        pair("max-width", &appearance.width),
        pair("margin", "0 auto"),
        pair("border-radius", &appearance.border_radius),
        pair("box-shadow", &appearance.box_shadow),
    ];
    if !appearance.background_image.is_empty() {
        page.push(pair(
            "background-image",
            format!("url({})", appearance.background_image),
        ));
    }

    w.add_line(&format!(
        "<div class=\"page-canvas\" style=\"{}\">",
        style_attr(&page)
    ));
    w.indent();

    for section in &doc.sections {
        write_section(&mut w, section, doc);
    }

    if doc.settings.show_submit_button || doc.settings.show_reset_button {
        write_action_row(&mut w, doc);
    }
    if !doc.settings.footer_text.is_empty() {
        w.add_line(&format!(
            "<div class=\"page-footer\">{}</div>",
            escape_html(&doc.settings.footer_text)
        ));
    }

    w.dedent();
    w.add_line("</div>");
    w.get_output()
}

fn write_section(w: &mut TemplateWriter, section: &Section, doc: &PageDocument) {
    let settings = &doc.settings;
    let appearance = &doc.appearance;

    if settings.show_section_wrappers {
        let styles = [
            pair("margin-bottom", &appearance.element_spacing),
            pair("padding-bottom", &appearance.element_spacing),
            pair(
                "border-bottom",
                format!("1px solid {}", appearance.section_divider_color),
            ),
        ];
        w.add_line(&format!(
            "<div class=\"page-section\" style=\"{}\">",
            style_attr(&styles)
        ));
    } else {
        w.add_line("<div class=\"page-section\">");
    }
    w.indent();

    if settings.show_section_titles {
        let styles = [
            pair("color", &appearance.section_title_color),
            pair("text-align", &appearance.header_alignment),
        ];
        w.add_line(&format!(
            "<h2 class=\"section-title\" style=\"{}\">{}</h2>",
            style_attr(&styles),
            escape_html(&section.title)
        ));
    }
    if settings.show_section_text {
        if let Some(description) = &section.description {
            if !description.is_empty() {
                w.add_line(&format!(
                    "<p class=\"section-description\">{}</p>",
                    escape_html(description)
                ));
            }
        }
    }

    for element in &section.elements {
        if settings.show_element_wrappers {
            let styles = [pair("margin-bottom", &appearance.element_spacing)];
            w.add_line(&format!(
                "<div class=\"page-element\" style=\"{}\">",
                style_attr(&styles)
            ));
            w.indent();
            write_element(w, element);
            w.dedent();
            w.add_line("</div>");
        } else {
            write_element(w, element);
        }
    }

    w.dedent();
    w.add_line("</div>");
}

fn write_action_row(w: &mut TemplateWriter, doc: &PageDocument) {
    let styles = [
        pair("text-align", "center"),
        pair("margin-top", &doc.appearance.element_spacing),
    ];
    w.add_line(&format!(
        "<div class=\"page-actions\" style=\"{}\">",
        style_attr(&styles)
    ));
    w.indent();
    if doc.settings.show_submit_button {
        let styles = [
            pair("background-color", &doc.appearance.primary_color),
            pair("color", "#ffffff"),
        ];
        w.add_line(&format!(
            "<button type=\"submit\" class=\"page-submit\" style=\"{}\">{}</button>",
            style_attr(&styles),
            escape_html(&doc.settings.submit_button_text)
        ));
    }
    if doc.settings.show_reset_button {
        let styles = [
            pair("background-color", &doc.appearance.secondary_color),
            pair("color", "#ffffff"),
        ];
        w.add_line(&format!(
            "<button type=\"reset\" class=\"page-reset\" style=\"{}\">{}</button>",
            style_attr(&styles),
            escape_html(&doc.settings.reset_button_text)
        ));
    }
    w.dedent();
    w.add_line("</div>");
}

fn write_element(w: &mut TemplateWriter, element: &Element) {
    match &element.props {
        ElementProps::Button(bag) => write_button(w, element, bag),
        ElementProps::Social(bag) => write_social(w, element, bag),
        ElementProps::Text(bag) => write_text(w, element, bag),
        ElementProps::Image(bag) => write_image(w, element, bag),
    }
}

fn write_button(w: &mut TemplateWriter, element: &Element, bag: &ButtonProps) {
    let scope = element.scope_class();
    let style = derive_style(&element.props, Simulate::default());

    write_pseudo_block(
        w,
        &format!(".{}:hover", scope),
        &format!(".{}:active", scope),
        &style,
        &bag.hover.hover_transition_duration,
    );

    let wrapper = [
        pair("text-align", or_str(&bag.alignment, "left")),
        pair("width", "100%"),
    ];
    w.add_line(&format!("<div style=\"{}\">", style_attr(&wrapper)));
    w.indent();

    let classes = class_attr("button-element", &scope, &bag.responsive);
    let inline = style_attr(&button_inline(bag, &style.base));
    let content = button_content(bag);
    let aria_label = escape_html(or_str(
        &bag.accessibility.aria_label,
        or_str(&bag.button_text, "Button"),
    ));
    let role = escape_html(&bag.accessibility.role);
    let tab_index = bag.accessibility.tab_index;

    match bag.button_type {
        ButtonKind::Link => w.add_line(&format!(
            "<a href=\"{}\" target=\"{}\" class=\"{}\" role=\"{}\" tabindex=\"{}\" \
             aria-label=\"{}\" style=\"{}\">{}</a>",
            escape_html(or_str(&bag.url, "#")),
            escape_html(or_str(&bag.target, "_self")),
            classes,
            role,
            tab_index,
            aria_label,
            inline,
            content
        )),
        ButtonKind::Submit => w.add_line(&format!(
            "<button type=\"submit\" class=\"{}\" role=\"{}\" tabindex=\"{}\" \
             aria-label=\"{}\" style=\"{}\">{}</button>",
            classes, role, tab_index, aria_label, inline, content
        )),
        ButtonKind::Reset => w.add_line(&format!(
            "<button type=\"reset\" class=\"{}\" role=\"{}\" tabindex=\"{}\" \
             aria-label=\"{}\" style=\"{}\">{}</button>",
            classes, role, tab_index, aria_label, inline, content
        )),
    }

    w.dedent();
    w.add_line("</div>");
}

fn button_inline(bag: &ButtonProps, base: &StyleDecl) -> Vec<(String, String)> {
    let mut styles = vec![
        pair("display", "inline-block"),
        pair("font-weight", "400"),
        pair("text-align", "center"),
        pair("vertical-align", "middle"),
        pair("user-select", "none"),
        pair("padding", &bag.padding),
        pair("font-size", button_font_size(&bag.button_size)),
        pair("line-height", "1.5"),
        pair("text-decoration", "none"),
        pair("cursor", "pointer"),
    ];
    if bag.full_width {
        styles.push(pair("width", "100%"));
    } else if bag.width != "auto" && !bag.width.is_empty() {
        styles.push(pair("width", &bag.width));
    }
    if bag.height != "auto" && !bag.height.is_empty() {
        styles.push(pair("height", &bag.height));
    }
    push_border(&mut styles, &bag.border);
    push_entries(&mut styles, base);
    push_animation(&mut styles, &bag.animation);
    styles.push(pair("transition", BASE_TRANSITION));
    styles
}

fn button_content(bag: &ButtonProps) -> String {
    let text = escape_html(or_str(&bag.button_text, "Click Me"));
    let Some(icon) = bag.icon.as_deref().filter(|i| !i.is_empty()) else {
        return text;
    };
    // Bracketed icon names, swapped for the real glyph set at publish time.
    if bag.icon_position == "right" {
        format!(
            "{}<span style=\"margin-left: 5px;\">[{}]</span>",
            text,
            escape_html(icon)
        )
    } else {
        format!(
            "<span style=\"margin-right: 5px;\">[{}]</span>{}",
            escape_html(icon),
            text
        )
    }
}

fn write_social(w: &mut TemplateWriter, element: &Element, bag: &SocialProps) {
    let scope = element.scope_class();
    let style = derive_style(&element.props, Simulate::default());

    write_pseudo_block(
        w,
        &format!(".{} a:hover", scope),
        &format!(".{} a:active", scope),
        &style,
        &bag.hover.hover_transition_duration,
    );

    let mut styles = vec![
        pair("display", "flex"),
        pair("flex-wrap", "wrap"),
        pair("gap", or_str(&bag.spacing, "1rem")),
        pair("justify-content", justify(&bag.alignment)),
        pair("width", or_str(&bag.width, "100%")),
        pair("height", or_str(&bag.height, "auto")),
        pair("margin", or_str(&bag.margin, "1rem 0")),
        pair("padding", or_str(&bag.padding, "0")),
    ];
    push_border(&mut styles, &bag.border);
    push_entries(&mut styles, &style.base);
    push_animation(&mut styles, &bag.animation);
    styles.push(pair("transition", BASE_TRANSITION));

    w.add_line(&format!(
        "<div class=\"{}\" role=\"{}\" style=\"{}\">",
        class_attr("social-element", &scope, &bag.responsive),
        escape_html(&bag.accessibility.role),
        style_attr(&styles)
    ));
    w.indent();

    let mut link_styles = vec![
        pair("color", "inherit"),
        pair("font-size", social_icon_size(&bag.icon_size)),
        pair("text-decoration", "none"),
    ];
    if bag.display_style == "buttons" {
        link_styles.push(pair("padding", "0.5rem 1rem"));
        link_styles.push(pair("border-radius", "4px"));
        link_styles.push(pair("background", "rgba(0,0,0,0.05)"));
    }
    let link_style = style_attr(&link_styles);

    for link in &bag.links {
        w.add_line(&format!(
            "<a class=\"social-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\" \
             aria-label=\"{}\" style=\"{}\">[{}]</a>",
            escape_html(or_str(&link.url, "#")),
            escape_html(or_str(&link.label, &link.platform)),
            link_style,
            escape_html(&link.platform)
        ));
    }

    w.dedent();
    w.add_line("</div>");
}

fn write_text(w: &mut TemplateWriter, element: &Element, bag: &TextProps) {
    let scope = element.scope_class();
    let style = derive_style(&element.props, Simulate::default());

    write_pseudo_block(
        w,
        &format!(".{}:hover", scope),
        &format!(".{}:active", scope),
        &style,
        &bag.hover.hover_transition_duration,
    );

    let mut styles = vec![
        pair("font-size", &bag.font_size),
        pair("font-weight", &bag.font_weight),
        pair("line-height", &bag.line_height),
        pair("text-align", or_str(&bag.alignment, "left")),
    ];
    push_border(&mut styles, &bag.border);
    push_entries(&mut styles, &style.base);
    push_animation(&mut styles, &bag.animation);
    styles.push(pair("transition", BASE_TRANSITION));

    w.add_line(&format!(
        "<div class=\"{}\" style=\"{}\">{}</div>",
        class_attr("text-element", &scope, &bag.responsive),
        style_attr(&styles),
        escape_html(&bag.content)
    ));
}

fn write_image(w: &mut TemplateWriter, element: &Element, bag: &ImageProps) {
    let scope = element.scope_class();
    let style = derive_style(&element.props, Simulate::default());

    write_pseudo_block(
        w,
        &format!(".{}:hover", scope),
        &format!(".{}:active", scope),
        &style,
        &bag.hover.hover_transition_duration,
    );

    let wrapper = [pair("text-align", or_str(&bag.alignment, "center"))];
    w.add_line(&format!("<div style=\"{}\">", style_attr(&wrapper)));
    w.indent();

    let mut styles = vec![
        pair("width", &bag.width),
        pair("height", &bag.height),
        pair("object-fit", &bag.object_fit),
    ];
    if bag.opacity < 1.0 {
        styles.push(pair("opacity", format!("{}", bag.opacity)));
    }
    push_border(&mut styles, &bag.border);
    push_entries(&mut styles, &style.base);
    push_animation(&mut styles, &bag.animation);
    styles.push(pair("transition", BASE_TRANSITION));

    w.add_line(&format!(
        "<img class=\"{}\" src=\"{}\" alt=\"{}\" style=\"{}\" />",
        class_attr("image-element", &scope, &bag.responsive),
        escape_html(&bag.src),
        escape_html(&bag.alt),
        style_attr(&styles)
    ));

    w.dedent();
    w.add_line("</div>");
}

/// `<style>` block with the hover and active rules. Skipped entirely when
/// the element has no pseudo-state styling.
fn write_pseudo_block(
    w: &mut TemplateWriter,
    hover_selector: &str,
    active_selector: &str,
    style: &ResolvedStyle,
    transition_duration: &str,
) {
    if style.hover.is_none() && style.active.is_none() {
        return;
    }
    w.add_line("<style>");
    w.indent();
    if let Some(hover) = &style.hover {
        write_rule(
            w,
            hover_selector,
            hover,
            &style.transition_value(transition_duration),
        );
    }
    if let Some(active) = &style.active {
        write_rule(w, active_selector, active, ACTIVE_TRANSITION);
    }
    w.dedent();
    w.add_line("</style>");
}

fn write_rule(w: &mut TemplateWriter, selector: &str, decl: &StyleDecl, transition: &str) {
    w.add_line(&format!("{} {{", selector));
    w.indent();
    for (property, value) in decl.entries() {
        w.add_line(&format!(
            "{}: {} !important;",
            property,
            sanitize_style_value(value)
        ));
    }
    w.add_line(&format!("transition: {} !important;", transition));
    w.dedent();
    w.add_line("}");
}

fn pair(property: &str, value: impl Into<String>) -> (String, String) {
    (property.to_string(), value.into())
}

fn push_entries(styles: &mut Vec<(String, String)>, decl: &StyleDecl) {
    for (property, value) in decl.entries() {
        styles.push(pair(property, value));
    }
}

fn push_border(styles: &mut Vec<(String, String)>, border: &BorderProps) {
    if border.border_style == "none" {
        styles.push(pair("border-style", "none"));
        styles.push(pair("border-radius", &border.border_radius));
    } else {
        styles.push(pair("border-width", &border.border_width));
        styles.push(pair("border-style", &border.border_style));
        styles.push(pair("border-radius", &border.border_radius));
    }
}

fn push_animation(styles: &mut Vec<(String, String)>, animation: &AnimationProps) {
    if animation.animation == "none" || animation.animation.is_empty() {
        return;
    }
    styles.push(pair(
        "animation",
        format!(
            "{} {} {} {}",
            animation.animation,
            animation.animation_duration,
            animation.animation_easing,
            animation.animation_delay
        ),
    ));
}

fn style_attr(styles: &[(String, String)]) -> String {
    styles
        .iter()
        .map(|(property, value)| format!("{}: {};", property, sanitize_style_value(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn class_attr(kind_class: &str, scope: &str, responsive: &ResponsiveProps) -> String {
    let mut classes = format!("{} {}", kind_class, scope);
    if responsive.hide_on_mobile {
        classes.push_str(" hide-on-mobile");
    }
    if responsive.hide_on_desktop {
        classes.push_str(" hide-on-desktop");
    }
    classes
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
