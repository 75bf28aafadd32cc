//! Virtual node tree handed to the interactive design surface.
//!
//! The host paints these nodes directly and re-renders synchronously on
//! every document change; nothing here is stringly templated. Attribute and
//! style order is preserved so renders are reproducible.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum VNode {
    Element {
        tag: String,
        classes: Vec<String>,
        attributes: Vec<(String, String)>,
        styles: Vec<(String, String)>,
        children: Vec<VNode>,
    },
    Text {
        content: String,
    },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        if let VNode::Element { ref mut classes, .. } = self {
            classes.push(class.into());
        }
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut attributes, .. } = self {
            attributes.push((key.into(), value.into()));
        }
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.push((property.into(), value.into()));
        }
        self
    }

    pub fn with_styles<I, P, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: Into<String>,
        V: Into<String>,
    {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.extend(entries.into_iter().map(|(p, v)| (p.into(), v.into())));
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element { ref mut children, .. } = self {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element { ref mut children, .. } = self {
            children.extend(new_children);
        }
        self
    }

    /// Value of an inline style property, if set.
    pub fn style(&self, property: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles
                .iter()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.as_str()),
            VNode::Text { .. } => None,
        }
    }

    /// Value of an attribute, if set.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            VNode::Text { .. } => None,
        }
    }
}

/// A pseudo-state style rule scoped to one element instance, applied by the
/// host's native hover/active machinery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl StyleRule {
    pub fn to_css(&self) -> String {
        let body = self
            .declarations
            .iter()
            .map(|(p, v)| format!("  {}: {};", p, v))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{} {{\n{}\n}}", self.selector, body)
    }
}

/// One rendered element (or a whole page): the paintable node plus the
/// per-instance pseudo-state rules that accompany it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasFragment {
    pub node: VNode,
    pub rules: Vec<StyleRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let node = VNode::element("a")
            .with_class("button-element")
            .with_attr("href", "#")
            .with_style("background", "#007bff")
            .with_style("color", "#ffffff")
            .with_child(VNode::text("Click Me"));

        assert_eq!(node.attr("href"), Some("#"));
        assert_eq!(node.style("background"), Some("#007bff"));
        match &node {
            VNode::Element { styles, .. } => {
                assert_eq!(styles[0].0, "background");
                assert_eq!(styles[1].0, "color");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn rule_renders_as_css() {
        let rule = StyleRule {
            selector: ".button-element-1:hover".into(),
            declarations: vec![("transform".into(), "scale(1.1)".into())],
        };
        assert_eq!(
            rule.to_css(),
            ".button-element-1:hover {\n  transform: scale(1.1);\n}"
        );
    }
}
