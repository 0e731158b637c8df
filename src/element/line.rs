use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use super::common::{self, Style, DEFAULT_STROKE_WIDTH, LINE_HIT_SLOP};
use super::{Element, ElementId, ShapeKind};
use crate::form::DrawingParams;

/// `line` node from (x1, y1) to (x2, y2)
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    id: ElementId,
    x1: Option<f32>,
    y1: Option<f32>,
    x2: Option<f32>,
    y2: Option<f32>,
    stroke: Option<Color32>,
    stroke_width: Option<f32>,
    style: Style,
}

impl Line {
    /// The second endpoint comes from the width/height fields
    pub(crate) fn from_params(id: ElementId, params: &DrawingParams) -> Self {
        Self {
            id,
            x1: params.x,
            y1: params.y,
            x2: params.width,
            y2: params.height,
            stroke: params.stroke,
            stroke_width: params.stroke_width,
            style: Style::default(),
        }
    }

    pub fn start(&self) -> Pos2 {
        Pos2::new(self.x1.unwrap_or(0.0), self.y1.unwrap_or(0.0))
    }

    pub fn end(&self) -> Pos2 {
        Pos2::new(self.x2.unwrap_or(0.0), self.y2.unwrap_or(0.0))
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH)
    }
}

impl Element for Line {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![("id", self.id.to_string())];
        common::push_number(&mut attrs, "y1", self.y1);
        common::push_number(&mut attrs, "x1", self.x1);
        common::push_number(&mut attrs, "y2", self.y2);
        common::push_number(&mut attrs, "x2", self.x2);
        common::push_color(&mut attrs, "stroke", self.stroke);
        common::push_number(&mut attrs, "stroke-width", self.stroke_width);
        attrs
    }

    fn bounds(&self) -> Option<Rect> {
        // A line without a stroke paints nothing
        self.effective_stroke()?;
        Some(Rect::from_two_pos(self.start(), self.end()).expand(self.stroke_width() / 2.0))
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        if let Some(stroke) = self.effective_stroke() {
            painter.line_segment(
                [
                    common::to_screen(self.start(), origin),
                    common::to_screen(self.end(), origin),
                ],
                Stroke::new(self.stroke_width(), stroke),
            );
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        if self.effective_stroke().is_none() {
            return false;
        }
        let reach = (self.stroke_width() / 2.0).max(LINE_HIT_SLOP);
        common::distance_to_line_segment(pos, self.start(), self.end()) <= reach
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Lines have no interior; a fill style is stored but never painted
    fn effective_fill(&self) -> Option<Color32> {
        None
    }

    fn effective_stroke(&self) -> Option<Color32> {
        self.style.stroke.or(self.stroke)
    }

    fn position(&self) -> Pos2 {
        self.start()
    }
}
