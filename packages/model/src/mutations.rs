//! Document mutations.
//!
//! Every operation is pure: it takes the current document and returns a new
//! one, leaving the input untouched. Operations that would violate an
//! invariant (missing id, last section) return an error instead of a
//! partially mutated tree, so callers can always keep rendering the document
//! they already hold.

use crate::document::{PageAppearance, PageDocument, PageSettings, Section};
use crate::elements::{Element, ElementKind, ElementProps};
use crate::errors::DocumentError;
use crate::id_generator::IdGenerator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Partial patch for a section. Unlike element bags, section fields are
/// independent strings, so a field-wise patch cannot cause derived-field
/// drift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Semantic editing operations over a [`PageDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    AddSection,
    AddElement {
        section_id: String,
        kind: ElementKind,
    },
    /// Whole-bag replacement. The element keeps its id; the variant must not
    /// change.
    UpdateElement {
        element_id: String,
        props: ElementProps,
    },
    UpdateSection {
        section_id: String,
        patch: SectionPatch,
    },
    MoveElement {
        element_id: String,
        direction: Direction,
    },
    MoveSection {
        section_id: String,
        direction: Direction,
    },
    CloneElement {
        element_id: String,
    },
    CloneSection {
        section_id: String,
    },
    DeleteElement {
        element_id: String,
    },
    DeleteSection {
        section_id: String,
    },
    UpdateSettings {
        settings: PageSettings,
    },
    UpdateAppearance {
        appearance: PageAppearance,
    },
}

/// Result of a successful mutation: the new document plus the ids of any
/// nodes the operation created, so the session can move its selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub doc: PageDocument,
    pub new_section_id: Option<String>,
    pub new_element_id: Option<String>,
}

impl Applied {
    fn doc(doc: PageDocument) -> Self {
        Self {
            doc,
            new_section_id: None,
            new_element_id: None,
        }
    }
}

impl Mutation {
    pub fn apply(
        &self,
        doc: &PageDocument,
        ids: &mut IdGenerator,
    ) -> Result<Applied, DocumentError> {
        match self {
            Mutation::AddSection => Ok(add_section(doc, ids)),
            Mutation::AddElement { section_id, kind } => add_element(doc, ids, section_id, *kind),
            Mutation::UpdateElement { element_id, props } => {
                update_element(doc, element_id, props.clone()).map(Applied::doc)
            }
            Mutation::UpdateSection { section_id, patch } => {
                update_section(doc, section_id, patch).map(Applied::doc)
            }
            Mutation::MoveElement {
                element_id,
                direction,
            } => move_element(doc, element_id, *direction).map(Applied::doc),
            Mutation::MoveSection {
                section_id,
                direction,
            } => move_section(doc, section_id, *direction).map(Applied::doc),
            Mutation::CloneElement { element_id } => clone_element(doc, ids, element_id),
            Mutation::CloneSection { section_id } => clone_section(doc, ids, section_id),
            Mutation::DeleteElement { element_id } => {
                Ok(Applied::doc(delete_element(doc, element_id)))
            }
            Mutation::DeleteSection { section_id } => {
                delete_section(doc, section_id).map(Applied::doc)
            }
            Mutation::UpdateSettings { settings } => {
                let mut next = doc.clone();
                next.settings = settings.clone();
                Ok(Applied::doc(next))
            }
            Mutation::UpdateAppearance { appearance } => {
                let mut next = doc.clone();
                next.appearance = appearance.clone();
                Ok(Applied::doc(next))
            }
        }
    }
}

/// Append a new section with a fresh unique id and a default title.
pub fn add_section(doc: &PageDocument, ids: &mut IdGenerator) -> Applied {
    let mut next = doc.clone();
    let id = ids.next_section_id(doc);
    next.sections.push(Section {
        id: id.clone(),
        title: format!("Section {}", doc.sections.len() + 1),
        description: None,
        elements: vec![],
    });
    Applied {
        doc: next,
        new_section_id: Some(id),
        new_element_id: None,
    }
}

/// Append an element built from the kind's default-property factory.
pub fn add_element(
    doc: &PageDocument,
    ids: &mut IdGenerator,
    section_id: &str,
    kind: ElementKind,
) -> Result<Applied, DocumentError> {
    let mut next = doc.clone();
    let id = ids.next_element_id(doc);
    let section = next
        .sections
        .iter_mut()
        .find(|s| s.id == section_id)
        .ok_or_else(|| DocumentError::SectionNotFound(section_id.to_string()))?;
    section.elements.push(Element {
        id: id.clone(),
        props: kind.default_props(),
    });
    Ok(Applied {
        doc: next,
        new_section_id: None,
        new_element_id: Some(id),
    })
}

/// Replace the element's entire property bag. The variant is immutable: a
/// replacement bag of a different kind is rejected.
pub fn update_element(
    doc: &PageDocument,
    element_id: &str,
    props: ElementProps,
) -> Result<PageDocument, DocumentError> {
    let current = doc
        .find_element(element_id)
        .ok_or_else(|| DocumentError::ElementNotFound(element_id.to_string()))?;
    if current.props.kind() != props.kind() {
        return Err(DocumentError::KindMismatch {
            expected: current.props.kind(),
            found: props.kind(),
        });
    }

    let mut next = doc.clone();
    for section in &mut next.sections {
        if let Some(element) = section.elements.iter_mut().find(|e| e.id == element_id) {
            element.props = props;
            break;
        }
    }
    Ok(next)
}

pub fn update_section(
    doc: &PageDocument,
    section_id: &str,
    patch: &SectionPatch,
) -> Result<PageDocument, DocumentError> {
    let mut next = doc.clone();
    let section = next
        .sections
        .iter_mut()
        .find(|s| s.id == section_id)
        .ok_or_else(|| DocumentError::SectionNotFound(section_id.to_string()))?;
    if let Some(title) = &patch.title {
        section.title = title.clone();
    }
    if let Some(description) = &patch.description {
        section.description = Some(description.clone());
    }
    Ok(next)
}

/// Swap the element with its neighbor in the owning section. No-op at either
/// boundary.
pub fn move_element(
    doc: &PageDocument,
    element_id: &str,
    direction: Direction,
) -> Result<PageDocument, DocumentError> {
    let mut next = doc.clone();
    let section = next
        .sections
        .iter_mut()
        .find(|s| s.elements.iter().any(|e| e.id == element_id))
        .ok_or_else(|| DocumentError::ElementNotFound(element_id.to_string()))?;

    let index = section
        .elements
        .iter()
        .position(|e| e.id == element_id)
        .expect("section was selected by containing the element");
    match direction {
        Direction::Up if index > 0 => section.elements.swap(index, index - 1),
        Direction::Down if index + 1 < section.elements.len() => {
            section.elements.swap(index, index + 1)
        }
        _ => {}
    }
    Ok(next)
}

pub fn move_section(
    doc: &PageDocument,
    section_id: &str,
    direction: Direction,
) -> Result<PageDocument, DocumentError> {
    let index = doc
        .sections
        .iter()
        .position(|s| s.id == section_id)
        .ok_or_else(|| DocumentError::SectionNotFound(section_id.to_string()))?;

    let mut next = doc.clone();
    match direction {
        Direction::Up if index > 0 => next.sections.swap(index, index - 1),
        Direction::Down if index + 1 < next.sections.len() => next.sections.swap(index, index + 1),
        _ => {}
    }
    Ok(next)
}

/// Deep-copy an element, assign a fresh unique id, suffix the label with
/// `" (Copy)"` and insert the copy immediately after the source.
pub fn clone_element(
    doc: &PageDocument,
    ids: &mut IdGenerator,
    element_id: &str,
) -> Result<Applied, DocumentError> {
    let id = ids.next_element_id(doc);
    let mut next = doc.clone();
    let section = next
        .sections
        .iter_mut()
        .find(|s| s.elements.iter().any(|e| e.id == element_id))
        .ok_or_else(|| DocumentError::ElementNotFound(element_id.to_string()))?;

    let index = section
        .elements
        .iter()
        .position(|e| e.id == element_id)
        .expect("section was selected by containing the element");
    let mut copy = section.elements[index].clone();
    copy.id = id.clone();
    copy.props.label_mut().push_str(" (Copy)");
    section.elements.insert(index + 1, copy);

    Ok(Applied {
        doc: next,
        new_section_id: None,
        new_element_id: Some(id),
    })
}

/// Deep-copy a section, regenerating the section id and every child element
/// id so no id collides with any existing id in the document.
pub fn clone_section(
    doc: &PageDocument,
    ids: &mut IdGenerator,
    section_id: &str,
) -> Result<Applied, DocumentError> {
    let index = doc
        .sections
        .iter()
        .position(|s| s.id == section_id)
        .ok_or_else(|| DocumentError::SectionNotFound(section_id.to_string()))?;

    let mut next = doc.clone();
    let mut copy = next.sections[index].clone();
    let new_id = ids.next_section_id(&next);
    copy.id = new_id.clone();
    copy.title.push_str(" (Copy)");
    for element in &mut copy.elements {
        // Checked against `next`, which still holds every pre-clone id.
        element.id = ids.next_element_id(&next);
    }
    next.sections.insert(index + 1, copy);

    Ok(Applied {
        doc: next,
        new_section_id: Some(new_id),
        new_element_id: None,
    })
}

/// Remove the element. A missing id is a no-op.
pub fn delete_element(doc: &PageDocument, element_id: &str) -> PageDocument {
    let mut next = doc.clone();
    for section in &mut next.sections {
        section.elements.retain(|e| e.id != element_id);
    }
    next
}

/// Remove the section. Deleting the only remaining section is rejected.
pub fn delete_section(doc: &PageDocument, section_id: &str) -> Result<PageDocument, DocumentError> {
    if !doc.sections.iter().any(|s| s.id == section_id) {
        return Err(DocumentError::SectionNotFound(section_id.to_string()));
    }
    if doc.sections.len() == 1 {
        return Err(DocumentError::LastSection);
    }
    let mut next = doc.clone();
    next.sections.retain(|s| s.id != section_id);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn fixture() -> (PageDocument, IdGenerator) {
        let mut ids = IdGenerator::new("page-1");
        let mut doc = PageDocument::new("Test Page");
        for kind in [ElementKind::Button, ElementKind::Text] {
            let applied = add_element(&doc, &mut ids, "section-1", kind).unwrap();
            doc = applied.doc;
        }
        (doc, ids)
    }

    #[test]
    fn add_section_appends_with_fresh_id() {
        let (doc, mut ids) = fixture();
        let applied = add_section(&doc, &mut ids);
        assert_eq!(applied.doc.sections.len(), 2);

        let new_id = applied.new_section_id.unwrap();
        assert_eq!(applied.doc.sections[1].id, new_id);
        assert_eq!(applied.doc.sections[1].title, "Section 2");
        assert!(!doc.contains_id(&new_id));
        // Input untouched.
        assert_eq!(doc.sections.len(), 1);
    }

    #[test]
    fn add_element_to_missing_section_fails() {
        let (doc, mut ids) = fixture();
        let err = add_element(&doc, &mut ids, "section-nope", ElementKind::Button).unwrap_err();
        assert_eq!(err, DocumentError::SectionNotFound("section-nope".into()));
    }

    #[test]
    fn update_element_replaces_whole_bag() {
        let (doc, _) = fixture();
        let button_id = doc.sections[0].elements[0].id.clone();

        let mut props = match &doc.sections[0].elements[0].props {
            ElementProps::Button(p) => p.clone(),
            _ => unreachable!(),
        };
        props.button_style = "outline".into();
        props.button_text = "Buy now".into();

        let next = update_element(&doc, &button_id, ElementProps::Button(props)).unwrap();
        match &next.find_element(&button_id).unwrap().props {
            ElementProps::Button(p) => {
                assert_eq!(p.button_style, "outline");
                assert_eq!(p.button_text, "Buy now");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn update_element_rejects_retyping() {
        let (doc, _) = fixture();
        let button_id = doc.sections[0].elements[0].id.clone();

        let err =
            update_element(&doc, &button_id, ElementKind::Image.default_props()).unwrap_err();
        assert_eq!(
            err,
            DocumentError::KindMismatch {
                expected: ElementKind::Button,
                found: ElementKind::Image,
            }
        );
    }

    #[test]
    fn update_element_missing_id_reports_not_found() {
        let (doc, _) = fixture();
        let err =
            update_element(&doc, "element-ghost", ElementKind::Button.default_props()).unwrap_err();
        assert_eq!(err, DocumentError::ElementNotFound("element-ghost".into()));
    }

    #[test]
    fn update_section_patches_fields_independently() {
        let (doc, _) = fixture();
        let patch = SectionPatch {
            title: Some("Hero".into()),
            description: None,
        };
        let next = update_section(&doc, "section-1", &patch).unwrap();
        assert_eq!(next.sections[0].title, "Hero");
        // Untouched field survives.
        assert_eq!(next.sections[0].description, doc.sections[0].description);
    }

    #[test]
    fn move_element_swaps_neighbors() {
        let (doc, _) = fixture();
        let first = doc.sections[0].elements[0].id.clone();
        let second = doc.sections[0].elements[1].id.clone();

        let next = move_element(&doc, &first, Direction::Down).unwrap();
        assert_eq!(next.sections[0].elements[0].id, second);
        assert_eq!(next.sections[0].elements[1].id, first);
    }

    #[test]
    fn move_element_is_noop_at_boundaries() {
        let (doc, _) = fixture();
        let first = doc.sections[0].elements[0].id.clone();
        let last = doc.sections[0].elements[1].id.clone();

        assert_eq!(move_element(&doc, &first, Direction::Up).unwrap(), doc);
        assert_eq!(move_element(&doc, &last, Direction::Down).unwrap(), doc);
    }

    #[test]
    fn move_section_is_noop_at_boundaries() {
        let (doc, mut ids) = fixture();
        let doc = add_section(&doc, &mut ids).doc;

        assert_eq!(
            move_section(&doc, "section-1", Direction::Up).unwrap(),
            doc
        );
        let swapped = move_section(&doc, "section-1", Direction::Down).unwrap();
        assert_eq!(swapped.sections[1].id, "section-1");
    }

    #[test]
    fn clone_element_copies_everything_but_the_id() {
        let (doc, mut ids) = fixture();
        let source_id = doc.sections[0].elements[0].id.clone();

        let applied = clone_element(&doc, &mut ids, &source_id).unwrap();
        let new_id = applied.new_element_id.unwrap();
        assert_ne!(new_id, source_id);

        // Inserted immediately after the source.
        let elements = &applied.doc.sections[0].elements;
        assert_eq!(elements[0].id, source_id);
        assert_eq!(elements[1].id, new_id);

        // All ids stay unique.
        let all = applied.doc.all_ids();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());

        // Non-id fields equal apart from the label suffix.
        match (&elements[0].props, &elements[1].props) {
            (ElementProps::Button(a), ElementProps::Button(b)) => {
                assert_eq!(b.label, format!("{} (Copy)", a.label));
                let mut b = b.clone();
                b.label = a.label.clone();
                assert_eq!(*a, b);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn clone_section_regenerates_every_child_id() {
        let (doc, mut ids) = fixture();
        let before: HashSet<String> = doc.all_ids().iter().map(|s| s.to_string()).collect();

        let applied = clone_section(&doc, &mut ids, "section-1").unwrap();
        let new_section = &applied.doc.sections[1];
        assert_eq!(new_section.title, "Default Section (Copy)");
        assert_eq!(new_section.elements.len(), 2);

        assert!(!before.contains(&new_section.id));
        for element in &new_section.elements {
            assert!(!before.contains(&element.id));
        }

        let all = applied.doc.all_ids();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn delete_element_is_noop_when_absent() {
        let (doc, _) = fixture();
        assert_eq!(delete_element(&doc, "element-ghost"), doc);

        let survivor = doc.sections[0].elements[1].id.clone();
        let target = doc.sections[0].elements[0].id.clone();
        let next = delete_element(&doc, &target);
        assert_eq!(next.sections[0].elements.len(), 1);
        assert_eq!(next.sections[0].elements[0].id, survivor);
    }

    #[test]
    fn delete_last_section_is_rejected() {
        let (doc, _) = fixture();
        let err = delete_section(&doc, "section-1").unwrap_err();
        assert_eq!(err, DocumentError::LastSection);
    }

    #[test]
    fn delete_section_removes_when_more_remain() {
        let (doc, mut ids) = fixture();
        let applied = add_section(&doc, &mut ids);
        let next = delete_section(&applied.doc, "section-1").unwrap();
        assert_eq!(next.sections.len(), 1);
        assert_eq!(next.sections[0].id, applied.new_section_id.unwrap());
    }

    #[test]
    fn mutations_serialize_with_op_tag() {
        let mutation = Mutation::MoveElement {
            element_id: "element-1".into(),
            direction: Direction::Up,
        };
        let json = serde_json::to_string(&mutation).unwrap();
        let back: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, back);
        assert!(json.contains("\"op\":\"moveElement\""));
    }

    #[test]
    fn update_settings_and_appearance_replace_whole_objects() {
        let (doc, mut ids) = fixture();
        let mut settings = doc.settings.clone();
        settings.show_section_titles = false;

        let applied = Mutation::UpdateSettings { settings }
            .apply(&doc, &mut ids)
            .unwrap();
        assert!(!applied.doc.settings.show_section_titles);
        // Mutation semantics untouched by settings.
        assert_eq!(applied.doc.sections, doc.sections);
    }
}
