use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::element::Element;
use crate::state::EditorContext;
use crate::tools::Tool;

const CANVAS_BACKGROUND: Color32 = Color32::WHITE;
const CANVAS_BORDER: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_gray(160),
};
const PREVIEW_STROKE: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_rgb(33, 150, 243),
};
const SELECTION_STROKE: Stroke = Stroke {
    width: 1.5,
    color: Color32::from_rgb(255, 152, 0),
};
const DASH: f32 = 4.0;
const GAP: f32 = 3.0;

/// Outline shown while a drag is in progress, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    Rect(Rect),
    Circle { center: Pos2, radius: f32 },
    Line(Pos2, Pos2),
}

/// What the release at `current` would stage, for a drag that started at `down`
pub fn gesture_preview(tool: Option<Tool>, down: Pos2, current: Pos2) -> Option<Preview> {
    match tool? {
        Tool::Rect if current.x >= down.x => Some(Preview::Rect(Rect::from_two_pos(down, current))),
        Tool::Circle if current.y > down.y => Some(Preview::Circle {
            center: down,
            radius: current.y - down.y,
        }),
        Tool::Line => Some(Preview::Line(down, current)),
        _ => None,
    }
}

/// Paints the document onto the canvas area
#[derive(Debug, Clone)]
pub struct Renderer {
    canvas_size: Vec2,
}

impl Renderer {
    pub fn new(canvas_size: Vec2) -> Self {
        Self { canvas_size }
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Renders the current frame
    ///
    /// `hover` is the pointer position in canvas coordinates, if known.
    pub fn render(&self, painter: &Painter, canvas_rect: Rect, editor: &EditorContext, hover: Option<Pos2>) {
        let origin = canvas_rect.min.to_vec2();
        let painter = painter.with_clip_rect(canvas_rect);

        painter.rect_filled(canvas_rect, 0.0, CANVAS_BACKGROUND);

        for element in editor.document().elements() {
            element.draw(&painter, origin);
        }

        if let Some(bounds) = editor.selection().and_then(|element| element.bounds()) {
            let bounds = bounds.expand(3.0).translate(origin);
            painter.extend(dashed_rect(bounds, SELECTION_STROKE));
        }

        if let (Some(down), Some(current)) = (editor.state().pressed_at(), hover) {
            if let Some(preview) = gesture_preview(editor.active_tool(), down, current) {
                self.draw_preview(&painter, preview, origin);
            }
        }

        painter.rect_stroke(canvas_rect, 0.0, CANVAS_BORDER);
    }

    fn draw_preview(&self, painter: &Painter, preview: Preview, origin: Vec2) {
        match preview {
            Preview::Rect(rect) => {
                painter.extend(dashed_rect(rect.translate(origin), PREVIEW_STROKE));
            }
            Preview::Circle { center, radius } => {
                painter.circle_stroke(center + origin, radius, PREVIEW_STROKE);
            }
            Preview::Line(start, end) => {
                painter.extend(Shape::dashed_line(
                    &[start + origin, end + origin],
                    PREVIEW_STROKE,
                    DASH,
                    GAP,
                ));
            }
        }
    }
}

fn dashed_rect(rect: Rect, stroke: Stroke) -> Vec<Shape> {
    let points = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    Shape::dashed_line(&points, stroke, DASH, GAP)
}
