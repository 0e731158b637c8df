use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use super::common::{self, Style, DEFAULT_FILL, DEFAULT_STROKE_WIDTH};
use super::{Element, ElementId, ShapeKind};
use crate::form::DrawingParams;

/// `circle` node. The form's x/y are written both as `x`/`y` and as the
/// centre `cx`/`cy`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    id: ElementId,
    cx: Option<f32>,
    cy: Option<f32>,
    r: Option<f32>,
    stroke: Option<Color32>,
    stroke_width: Option<f32>,
    fill: Option<Color32>,
    style: Style,
}

impl Circle {
    pub(crate) fn from_params(id: ElementId, params: &DrawingParams) -> Self {
        Self {
            id,
            cx: params.x,
            cy: params.y,
            r: params.radius,
            stroke: params.stroke,
            stroke_width: params.stroke_width,
            fill: params.fill,
            style: Style::default(),
        }
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(self.cx.unwrap_or(0.0), self.cy.unwrap_or(0.0))
    }

    /// Radius, if it is positive. A zero or negative radius is not painted.
    pub fn radius(&self) -> Option<f32> {
        self.r.filter(|r| *r > 0.0)
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH)
    }
}

impl Element for Circle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![("id", self.id.to_string())];
        common::push_number(&mut attrs, "y", self.cy);
        common::push_number(&mut attrs, "x", self.cx);
        common::push_number(&mut attrs, "cy", self.cy);
        common::push_number(&mut attrs, "cx", self.cx);
        common::push_color(&mut attrs, "stroke", self.stroke);
        common::push_number(&mut attrs, "stroke-width", self.stroke_width);
        common::push_color(&mut attrs, "fill", self.fill);
        common::push_number(&mut attrs, "r", self.r);
        attrs
    }

    fn bounds(&self) -> Option<Rect> {
        let r = self.radius()?;
        Some(Rect::from_center_size(self.center(), Vec2::splat(r * 2.0)))
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        let Some(r) = self.radius() else {
            return;
        };
        let center = common::to_screen(self.center(), origin);
        if let Some(fill) = self.effective_fill() {
            painter.circle_filled(center, r, fill);
        }
        if let Some(stroke) = self.effective_stroke() {
            painter.circle_stroke(center, r, Stroke::new(self.stroke_width(), stroke));
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.radius()
            .is_some_and(|r| pos.distance(self.center()) <= r + self.stroke_width() / 2.0)
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn effective_fill(&self) -> Option<Color32> {
        Some(self.style.fill.or(self.fill).unwrap_or(DEFAULT_FILL))
    }

    fn effective_stroke(&self) -> Option<Color32> {
        self.style.stroke.or(self.stroke)
    }

    fn position(&self) -> Pos2 {
        self.center()
    }
}
