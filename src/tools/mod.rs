use serde::{Deserialize, Serialize};

/// The drawing tools that can be picked from the sidebar.
///
/// Exactly one tool (or none) is active per session. The active tool alone
/// decides what a pointer-down on the canvas does: create a shape from the
/// current form values, or recolor the shape under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Fill,
    Rect,
    Circle,
    Text,
    Line,
    #[default]
    Select,
}

impl Tool {
    /// All tools, in toolbar order
    pub const ALL: [Tool; 6] = [
        Tool::Select,
        Tool::Fill,
        Tool::Rect,
        Tool::Circle,
        Tool::Line,
        Tool::Text,
    ];

    /// The literal name used by tool buttons and config files
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Fill => "fill",
            Tool::Rect => "rect",
            Tool::Circle => "circle",
            Tool::Text => "text",
            Tool::Line => "line",
            Tool::Select => "select",
        }
    }

    /// Parse a tool name. Unrecognized names yield `None`.
    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Label shown on the toolbar button
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Fill => "🪣 Fill",
            Tool::Rect => "▭ Rect",
            Tool::Circle => "◯ Circle",
            Tool::Text => "T Text",
            Tool::Line => "╱ Line",
            Tool::Select => "⬚ Select",
        }
    }

    /// True for the tools whose pointer-down appends a new shape
    pub fn creates_shapes(&self) -> bool {
        matches!(self, Tool::Rect | Tool::Circle | Tool::Text | Tool::Line)
    }

    /// True for the tools that restyle the shape under the pointer
    pub fn recolors(&self) -> bool {
        matches!(self, Tool::Fill | Tool::Select)
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
