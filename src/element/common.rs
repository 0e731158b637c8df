use egui::{Color32, Pos2, Vec2};

/// Extra reach around thin lines when picking them with the pointer
pub const LINE_HIT_SLOP: f32 = 2.0;

/// Stroke width the renderer assumes when none was given
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// Fill used when a shape has neither a fill attribute nor a fill style
pub const DEFAULT_FILL: Color32 = Color32::BLACK;

/// Style properties set after creation by recoloring.
///
/// These take precedence over the `fill`/`stroke` attributes the shape
/// was created with, the same way an inline style beats a presentation
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fill: Option<Color32>,
    pub stroke: Option<Color32>,
}

impl Style {
    /// Apply new values; `None` leaves the current value in place
    pub fn apply(&mut self, fill: Option<Color32>, stroke: Option<Color32>) {
        if fill.is_some() {
            self.fill = fill;
        }
        if stroke.is_some() {
            self.stroke = stroke;
        }
    }
}

/// `#rrggbb`, or `#rrggbbaa` when the colour is not opaque
pub fn color_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Push `name=value` if the value is present
pub(crate) fn push_number(attrs: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<f32>) {
    if let Some(value) = value {
        attrs.push((name, crate::form::format_number(value)));
    }
}

pub(crate) fn push_color(attrs: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<Color32>) {
    if let Some(value) = value {
        attrs.push((name, color_to_hex(value)));
    }
}

/// Calculate distance from a point to a line segment
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = (point_vec.dot(line_vec) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Shift a surface position onto the screen
pub(crate) fn to_screen(pos: Pos2, origin: Vec2) -> Pos2 {
    pos + origin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(color_to_hex(Color32::from_rgb(255, 0, 0)), "#ff0000");
        assert_eq!(color_to_hex(Color32::BLACK), "#000000");
        assert_eq!(
            color_to_hex(Color32::from_rgba_unmultiplied(0, 0, 255, 128)),
            "#0000ff80"
        );
    }

    #[test]
    fn segment_distance() {
        let a = Pos2::new(0.0, 0.0);
        let b = Pos2::new(10.0, 0.0);
        assert_eq!(distance_to_line_segment(Pos2::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(distance_to_line_segment(Pos2::new(14.0, 3.0), a, b), 5.0);
        assert_eq!(distance_to_line_segment(Pos2::new(0.0, 2.0), a, a), 2.0);
    }

    #[test]
    fn style_keeps_unset_values() {
        let mut style = Style::default();
        style.apply(Some(Color32::RED), Some(Color32::BLUE));
        style.apply(None, Some(Color32::GREEN));
        assert_eq!(style.fill, Some(Color32::RED));
        assert_eq!(style.stroke, Some(Color32::GREEN));
    }
}
