use egui::{Color32, Painter, Pos2, Rect as EguiRect, Stroke, Vec2};

use super::common::{self, Style, DEFAULT_FILL, DEFAULT_STROKE_WIDTH};
use super::{Element, ElementId, ShapeKind};
use crate::form::DrawingParams;

/// `rect` node: x, y, width, height, fill, stroke, stroke-width
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    id: ElementId,
    x: Option<f32>,
    y: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    fill: Option<Color32>,
    stroke: Option<Color32>,
    stroke_width: Option<f32>,
    style: Style,
}

impl Rect {
    pub(crate) fn from_params(id: ElementId, params: &DrawingParams) -> Self {
        Self {
            id,
            x: params.x,
            y: params.y,
            width: params.width,
            height: params.height,
            fill: params.fill,
            stroke: params.stroke,
            stroke_width: params.stroke_width,
            style: Style::default(),
        }
    }

    /// Canvas area of the rectangle, if width and height make it visible
    pub fn rect(&self) -> Option<EguiRect> {
        let width = self.width.filter(|w| *w > 0.0)?;
        let height = self.height.filter(|h| *h > 0.0)?;
        let min = Pos2::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0));
        Some(EguiRect::from_min_size(min, Vec2::new(width, height)))
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH)
    }
}

impl Element for Rect {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> ShapeKind {
        ShapeKind::Rect
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![("id", self.id.to_string())];
        common::push_number(&mut attrs, "y", self.y);
        common::push_number(&mut attrs, "x", self.x);
        common::push_number(&mut attrs, "height", self.height);
        common::push_number(&mut attrs, "width", self.width);
        common::push_color(&mut attrs, "fill", self.fill);
        common::push_color(&mut attrs, "stroke", self.stroke);
        common::push_number(&mut attrs, "stroke-width", self.stroke_width);
        attrs
    }

    fn bounds(&self) -> Option<EguiRect> {
        self.rect()
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        let Some(rect) = self.rect() else {
            return;
        };
        let rect = rect.translate(origin);
        if let Some(fill) = self.effective_fill() {
            painter.rect_filled(rect, 0.0, fill);
        }
        if let Some(stroke) = self.effective_stroke() {
            painter.rect_stroke(rect, 0.0, Stroke::new(self.stroke_width(), stroke));
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.rect()
            .is_some_and(|rect| rect.expand(self.stroke_width() / 2.0).contains(pos))
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
        Pos2::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }
}
