use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::SketchError;

/// Identifies one of the sidebar input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    X,
    Y,
    Width,
    Height,
    Radius,
    Stroke,
    StrokeWidth,
    Color,
    TextIn,
}

impl FieldId {
    pub const ALL: [FieldId; 9] = [
        FieldId::X,
        FieldId::Y,
        FieldId::Width,
        FieldId::Height,
        FieldId::Radius,
        FieldId::Stroke,
        FieldId::StrokeWidth,
        FieldId::Color,
        FieldId::TextIn,
    ];

    /// The element id the field is known by in the sidebar
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::X => "x",
            FieldId::Y => "y",
            FieldId::Width => "width",
            FieldId::Height => "height",
            FieldId::Radius => "r",
            FieldId::Stroke => "stroke",
            FieldId::StrokeWidth => "stSize",
            FieldId::Color => "color",
            FieldId::TextIn => "textin",
        }
    }
}

/// Raw contents of the sidebar form.
///
/// Every value is kept as the text the user typed (or the pointer handlers
/// wrote back). Nothing is validated here; see [`DrawingParams::read`] for
/// the typed view the factories consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
    pub r: String,
    pub stroke: String,
    #[serde(rename = "stSize")]
    pub st_size: String,
    pub color: String,
    pub textin: String,
    /// Whether the text-input field is shown
    #[serde(skip)]
    pub text_input_visible: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            x: "0".to_owned(),
            y: "0".to_owned(),
            width: "100".to_owned(),
            height: "100".to_owned(),
            r: "50".to_owned(),
            stroke: "#000000".to_owned(),
            st_size: "1".to_owned(),
            color: "#ffffff".to_owned(),
            textin: String::new(),
            text_input_visible: false,
        }
    }
}

impl FormState {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::X => &self.x,
            FieldId::Y => &self.y,
            FieldId::Width => &self.width,
            FieldId::Height => &self.height,
            FieldId::Radius => &self.r,
            FieldId::Stroke => &self.stroke,
            FieldId::StrokeWidth => &self.st_size,
            FieldId::Color => &self.color,
            FieldId::TextIn => &self.textin,
        }
    }

    pub fn get_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::X => &mut self.x,
            FieldId::Y => &mut self.y,
            FieldId::Width => &mut self.width,
            FieldId::Height => &mut self.height,
            FieldId::Radius => &mut self.r,
            FieldId::Stroke => &mut self.stroke,
            FieldId::StrokeWidth => &mut self.st_size,
            FieldId::Color => &mut self.color,
            FieldId::TextIn => &mut self.textin,
        }
    }

    /// Overwrite a field with a number, formatted the way a form input shows it
    pub fn set_number(&mut self, field: FieldId, value: f32) {
        *self.get_mut(field) = format_number(value);
    }

    /// Numeric reading of a field for arithmetic.
    ///
    /// Surrounding whitespace is ignored and an empty field counts as zero,
    /// matching how a form input coerces to a number.
    pub fn number(&self, field: FieldId) -> Result<f32, SketchError> {
        let raw = self.get(field).trim();
        if raw.is_empty() {
            return Ok(0.0);
        }
        raw.parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| SketchError::InvalidNumber {
                field: field.key(),
                value: raw.to_owned(),
            })
    }
}

/// Format a number without a trailing `.0` for whole values
pub fn format_number(value: f32) -> String {
    format!("{value}")
}

/// Typed snapshot of the form, taken once per factory call.
///
/// A field that does not parse becomes `None`: the attribute it would have
/// produced is dropped, the way a renderer ignores a malformed attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawingParams {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub radius: Option<f32>,
    pub stroke: Option<Color32>,
    pub stroke_width: Option<f32>,
    pub fill: Option<Color32>,
    pub text: String,
}

impl DrawingParams {
    pub fn read(form: &FormState) -> Self {
        Self {
            x: attribute_number(form, FieldId::X),
            y: attribute_number(form, FieldId::Y),
            width: attribute_number(form, FieldId::Width),
            height: attribute_number(form, FieldId::Height),
            radius: attribute_number(form, FieldId::Radius),
            stroke: attribute_color(form, FieldId::Stroke),
            stroke_width: attribute_number(form, FieldId::StrokeWidth),
            fill: attribute_color(form, FieldId::Color),
            text: form.textin.clone(),
        }
    }
}

fn attribute_number(form: &FormState, field: FieldId) -> Option<f32> {
    // An empty attribute is ignored rather than read as zero
    if form.get(field).trim().is_empty() {
        return None;
    }
    match form.number(field) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Dropping attribute: {}", err);
            None
        }
    }
}

fn attribute_color(form: &FormState, field: FieldId) -> Option<Color32> {
    match parse_color(form.get(field)) {
        Ok(color) => Some(color),
        Err(err) => {
            log::warn!("Dropping attribute: {}", err);
            None
        }
    }
}

/// Parse a `#rgb`/`#rrggbb` (or 4/8 digit) hex colour
pub fn parse_color(raw: &str) -> Result<Color32, SketchError> {
    let trimmed = raw.trim();
    Color32::from_hex(trimmed).map_err(|_| SketchError::InvalidColor(trimmed.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_coercion() {
        let mut form = FormState::default();
        form.x = " 12.5 ".to_owned();
        form.y = String::new();
        form.width = "abc".to_owned();

        assert_eq!(form.number(FieldId::X).unwrap(), 12.5);
        assert_eq!(form.number(FieldId::Y).unwrap(), 0.0);
        assert!(form.number(FieldId::Width).is_err());
    }

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(format_number(40.0), "40");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn malformed_fields_become_absent() {
        let mut form = FormState::default();
        form.width = "wide".to_owned();
        form.height = String::new();
        form.color = "not a colour".to_owned();

        let params = DrawingParams::read(&form);
        assert_eq!(params.width, None);
        assert_eq!(params.height, None);
        assert_eq!(params.fill, None);
        assert_eq!(params.stroke, Some(Color32::BLACK));
    }
}
