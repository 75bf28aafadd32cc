//! Page document tree: sections, settings and appearance.

use crate::elements::Element;
use serde::{Deserialize, Serialize};

/// The whole page definition. Invariant: `sections` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    pub title: String,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub settings: PageSettings,
    #[serde(default)]
    pub appearance: PageAppearance,
}

impl PageDocument {
    /// Empty document with the single default section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: vec![Section {
                id: "section-1".into(),
                title: "Default Section".into(),
                description: Some("This is the default section of your page.".into()),
                elements: vec![],
            }],
            settings: PageSettings::default(),
            appearance: PageAppearance::default(),
        }
    }

    pub fn find_section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn find_element(&self, element_id: &str) -> Option<&Element> {
        self.sections
            .iter()
            .flat_map(|s| s.elements.iter())
            .find(|e| e.id == element_id)
    }

    /// Section owning the given element, if any.
    pub fn section_of(&self, element_id: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.elements.iter().any(|e| e.id == element_id))
    }

    /// True if any section or element carries this id.
    pub fn contains_id(&self, id: &str) -> bool {
        self.sections
            .iter()
            .any(|s| s.id == id || s.elements.iter().any(|e| e.id == id))
    }

    /// Every id in the document, sections and elements alike.
    pub fn all_ids(&self) -> Vec<&str> {
        self.sections
            .iter()
            .flat_map(|s| {
                std::iter::once(s.id.as_str()).chain(s.elements.iter().map(|e| e.id.as_str()))
            })
            .collect()
    }
}

/// Ordered group of elements with its own title and description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Pure rendering toggles. These affect the canvas and template renderers
/// only, never mutation semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSettings {
    pub show_section_wrappers: bool,
    pub show_section_titles: bool,
    pub show_section_text: bool,
    pub show_element_wrappers: bool,
    pub show_submit_button: bool,
    pub submit_button_text: String,
    pub show_reset_button: bool,
    pub reset_button_text: String,
    pub footer_text: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            show_section_wrappers: true,
            show_section_titles: true,
            show_section_text: true,
            show_element_wrappers: true,
            show_submit_button: false,
            submit_button_text: "Submit".into(),
            show_reset_button: false,
            reset_button_text: "Reset".into(),
            footer_text: String::new(),
        }
    }
}

/// Page-level theme, passed through unmodified to both renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageAppearance {
    pub background_color: String,
    pub background_image: String,
    pub font_family: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    pub border_radius: String,
    pub box_shadow: String,
    pub header_alignment: String,
    pub width: String,
    pub section_title_color: String,
    pub section_divider_color: String,
    pub element_spacing: String,
}

impl Default for PageAppearance {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".into(),
            background_image: String::new(),
            font_family: "Arial, sans-serif".into(),
            primary_color: "#007bff".into(),
            secondary_color: "#6c757d".into(),
            text_color: "#212529".into(),
            border_radius: "10px".into(),
            box_shadow: "0 0 20px rgba(0, 0, 0, 0.1)".into(),
            header_alignment: "center".into(),
            width: "800px".into(),
            section_title_color: "#343a40".into(),
            section_divider_color: "#dee2e6".into(),
            element_spacing: "15px".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementKind, Element};

    #[test]
    fn new_document_has_one_default_section() {
        let doc = PageDocument::new("Landing");
        assert_eq!(doc.title, "Landing");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Default Section");
    }

    #[test]
    fn lookup_helpers_walk_the_whole_tree() {
        let mut doc = PageDocument::new("p");
        doc.sections[0].elements.push(Element {
            id: "element-x".into(),
            props: ElementKind::Text.default_props(),
        });

        assert!(doc.find_element("element-x").is_some());
        assert!(doc.find_element("element-y").is_none());
        assert_eq!(doc.section_of("element-x").unwrap().id, "section-1");
        assert!(doc.contains_id("section-1"));
        assert!(doc.contains_id("element-x"));
        assert_eq!(doc.all_ids(), vec!["section-1", "element-x"]);
    }

    #[test]
    fn settings_and_appearance_round_trip_with_defaults() {
        let doc = PageDocument::new("p");
        let json = serde_json::to_string(&doc).unwrap();
        let back: PageDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);

        // A bare document from an older save still deserializes.
        let legacy = r#"{"title":"Old","sections":[{"id":"s","title":"S","elements":[]}]}"#;
        let doc: PageDocument = serde_json::from_str(legacy).unwrap();
        assert!(doc.settings.show_section_wrappers);
        assert_eq!(doc.appearance.primary_color, "#007bff");
    }
}
