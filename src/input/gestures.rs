use egui::Pos2;

use crate::form::{FieldId, FormState};
use crate::tools::Tool;

/// What a pointer release did to the form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// Width and height were set from the drag
    RectStaged { width: f32, height: f32 },
    /// The radius was set from the vertical drag distance
    RadiusStaged(f32),
    /// Both line endpoints were written to x/y and width/height
    LineStaged { start: Pos2, end: Pos2 },
    /// A leftward rectangle drag; the form was left untouched
    Abandoned,
    /// The tool does not react to releases
    Ignored,
}

/// Derive the size fields from a finished drag.
///
/// `down` is the position captured at pointer-down and `up` the release
/// position, both relative to the canvas. The rect and circle tools measure
/// against the x/y currently in the form, which normally hold `down`.
pub fn stage_release(tool: Option<Tool>, down: Pos2, up: Pos2, form: &mut FormState) -> ReleaseOutcome {
    match tool {
        Some(Tool::Rect) => {
            let (Ok(x), Ok(y)) = (form.number(FieldId::X), form.number(FieldId::Y)) else {
                log::warn!("Rect release ignored: x/y fields are not numbers");
                return ReleaseOutcome::Abandoned;
            };
            // Only rightward drags size the rectangle
            if up.x < x {
                return ReleaseOutcome::Abandoned;
            }
            let width = up.x - x;
            let height = up.y - y;
            form.set_number(FieldId::Width, width);
            form.set_number(FieldId::Height, height);
            ReleaseOutcome::RectStaged { width, height }
        }
        Some(Tool::Circle) => {
            let Ok(y) = form.number(FieldId::Y) else {
                log::warn!("Circle release ignored: y field is not a number");
                return ReleaseOutcome::Ignored;
            };
            // Vertical distance only; may be negative
            let radius = up.y - y;
            form.set_number(FieldId::Radius, radius);
            ReleaseOutcome::RadiusStaged(radius)
        }
        Some(Tool::Line) => {
            form.set_number(FieldId::X, down.x);
            form.set_number(FieldId::Y, down.y);
            form.set_number(FieldId::Width, up.x);
            form.set_number(FieldId::Height, up.y);
            ReleaseOutcome::LineStaged { start: down, end: up }
        }
        Some(Tool::Fill | Tool::Text | Tool::Select) | None => ReleaseOutcome::Ignored,
    }
}
