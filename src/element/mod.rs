use egui::{Color32, Painter, Pos2, Rect, Vec2};

mod common;
pub mod circle;
pub mod line;
pub mod rect;
pub mod text;

pub use common::{Style, color_to_hex, DEFAULT_FILL, DEFAULT_STROKE_WIDTH, LINE_HIT_SLOP};

/// The kinds of vector node the canvas accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rect,
    Circle,
    Line,
    Text,
}

impl ShapeKind {
    /// Tag name of the node, also the prefix of its identifier
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Line => "line",
            ShapeKind::Text => "text",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Unique identifier of a shape, displayed as `<kind>_<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    kind: ShapeKind,
    serial: u64,
}

impl ElementId {
    pub fn new(kind: ShapeKind, serial: u64) -> Self {
        Self { kind, serial }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn serial(&self) -> u64 {
        self.serial
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.kind, self.serial)
    }
}

/// Common trait that all shape nodes implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> ElementId;

    /// Get the node kind
    fn element_type(&self) -> ShapeKind;

    /// The node's attributes in the order they were set, starting with `id`.
    ///
    /// Attributes whose form value did not parse are absent.
    fn attributes(&self) -> Vec<(&'static str, String)>;

    /// Area covered on the canvas, or `None` if the node is not rendered
    fn bounds(&self) -> Option<Rect>;

    /// Draw the element; `origin` is the canvas position on screen
    fn draw(&self, painter: &Painter, origin: Vec2);

    /// Test if the element is a click target at the given canvas position
    fn hit_test(&self, pos: Pos2) -> bool;

    /// Inline style set by recoloring
    fn style(&self) -> &Style;

    fn style_mut(&mut self) -> &mut Style;

    /// Fill actually painted, taking the style into account
    fn effective_fill(&self) -> Option<Color32>;

    /// Stroke actually painted, taking the style into account
    fn effective_stroke(&self) -> Option<Color32>;

    /// Position reported in the selection panel
    fn position(&self) -> Pos2;
}

/// Enumeration of all shape nodes in the document
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Rect(rect::Rect),
    Circle(circle::Circle),
    Line(line::Line),
    Text(text::Text),
}

impl ElementType {
    /// Value of one attribute, as the node would report it
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Whether clicking this node reaches the recolor procedure.
    ///
    /// Text nodes are created without a click handler.
    pub fn is_clickable(&self) -> bool {
        !matches!(self, ElementType::Text(_))
    }

    /// Restyle fill and stroke; `None` leaves a property untouched
    pub fn recolor(&mut self, fill: Option<Color32>, stroke: Option<Color32>) {
        self.style_mut().apply(fill, stroke);
    }

    fn inner(&self) -> &dyn Element {
        match self {
            ElementType::Rect(r) => r,
            ElementType::Circle(c) => c,
            ElementType::Line(l) => l,
            ElementType::Text(t) => t,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Element {
        match self {
            ElementType::Rect(r) => r,
            ElementType::Circle(c) => c,
            ElementType::Line(l) => l,
            ElementType::Text(t) => t,
        }
    }
}

impl Element for ElementType {
    fn id(&self) -> ElementId {
        self.inner().id()
    }

    fn element_type(&self) -> ShapeKind {
        self.inner().element_type()
    }

    fn attributes(&self) -> Vec<(&'static str, String)> {
        self.inner().attributes()
    }

    fn bounds(&self) -> Option<Rect> {
        self.inner().bounds()
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        self.inner().draw(painter, origin)
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.is_clickable() && self.inner().hit_test(pos)
    }

    fn style(&self) -> &Style {
        self.inner().style()
    }

    fn style_mut(&mut self) -> &mut Style {
        self.inner_mut().style_mut()
    }

    fn effective_fill(&self) -> Option<Color32> {
        self.inner().effective_fill()
    }

    fn effective_stroke(&self) -> Option<Color32> {
        self.inner().effective_stroke()
    }

    fn position(&self) -> Pos2 {
        self.inner().position()
    }
}

/// Factory functions for creating elements from the current drawing parameters
pub mod factory {
    use super::*;
    use crate::form::DrawingParams;

    /// Rectangle at (x, y) with the form's width and height
    pub fn create_rect(id: ElementId, params: &DrawingParams) -> ElementType {
        ElementType::Rect(rect::Rect::from_params(id, params))
    }

    /// Circle centred on (x, y) with the form's radius
    pub fn create_circle(id: ElementId, params: &DrawingParams) -> ElementType {
        ElementType::Circle(circle::Circle::from_params(id, params))
    }

    /// Line from (x, y) to (width, height): the width and height fields hold
    /// the second endpoint staged by the last line gesture
    pub fn create_line(id: ElementId, params: &DrawingParams) -> ElementType {
        ElementType::Line(line::Line::from_params(id, params))
    }

    /// Text node at (x, y) holding the text-input content
    pub fn create_text(id: ElementId, params: &DrawingParams) -> ElementType {
        ElementType::Text(text::Text::from_params(id, params))
    }

    /// Dispatch to the factory matching `kind`
    pub fn create(kind: ShapeKind, id: ElementId, params: &DrawingParams) -> ElementType {
        match kind {
            ShapeKind::Rect => create_rect(id, params),
            ShapeKind::Circle => create_circle(id, params),
            ShapeKind::Line => create_line(id, params),
            ShapeKind::Text => create_text(id, params),
        }
    }
}
