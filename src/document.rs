use egui::Pos2;

use crate::element::{Element, ElementId, ElementType};

/// The live drawing: shape nodes in paint order, last on top.
///
/// Nodes are only ever appended. Identifiers are minted by the session's
/// [`ElementCounter`](crate::id_generator::ElementCounter), never here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Vec<ElementType>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_element(&mut self, element: ElementType) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[ElementType] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn find_element_by_id(&self, id: ElementId) -> Option<&ElementType> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn find_element_by_id_mut(&mut self, id: ElementId) -> Option<&mut ElementType> {
        self.elements.iter_mut().find(|element| element.id() == id)
    }

    /// Topmost clickable node under a canvas position
    pub fn element_at(&self, pos: Pos2) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|element| element.hit_test(pos))
            .map(|element| element.id())
    }
}
