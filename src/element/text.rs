use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

use super::common::{self, Style, DEFAULT_FILL};
use super::{Element, ElementId, ShapeKind};
use crate::form::DrawingParams;

/// Font size used for text nodes
pub const TEXT_SIZE: f32 = 16.0;

/// `text` node: position plus a child text node with the content.
///
/// Carries no fill or stroke attributes and no click handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    id: ElementId,
    x: Option<f32>,
    y: Option<f32>,
    content: String,
    style: Style,
}

impl Text {
    pub(crate) fn from_params(id: ElementId, params: &DrawingParams) -> Self {
        Self {
            id,
            x: params.x,
            y: params.y,
            content: params.text.clone(),
            style: Style::default(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Baseline anchor of the text
    pub fn anchor(&self) -> Pos2 {
        Pos2::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }
}

impl Element for Text {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> ShapeKind {
        ShapeKind::Text
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![("id", self.id.to_string())];
        common::push_number(&mut attrs, "y", self.y);
        common::push_number(&mut attrs, "x", self.x);
        attrs
    }

    fn bounds(&self) -> Option<Rect> {
        if self.content.is_empty() {
            return None;
        }
        // Rough extent; exact glyph metrics need a font context
        let width = self.content.chars().count() as f32 * TEXT_SIZE * 0.5;
        Some(Rect::from_min_max(
            self.anchor() - Vec2::new(0.0, TEXT_SIZE),
            self.anchor() + Vec2::new(width, 0.0),
        ))
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        if self.content.is_empty() {
            return;
        }
        painter.text(
            common::to_screen(self.anchor(), origin),
            Align2::LEFT_BOTTOM,
            &self.content,
            FontId::proportional(TEXT_SIZE),
            self.effective_fill().unwrap_or(DEFAULT_FILL),
        );
    }

    fn hit_test(&self, _pos: Pos2) -> bool {
        false
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn effective_fill(&self) -> Option<Color32> {
        Some(self.style.fill.unwrap_or(DEFAULT_FILL))
    }

    fn effective_stroke(&self) -> Option<Color32> {
        self.style.stroke
    }

    fn position(&self) -> Pos2 {
        self.anchor()
    }
}
