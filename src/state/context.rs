//! The session object every canvas interaction goes through.
//!
//! `EditorContext` owns everything that changes while the user draws: the
//! active tool, the element counter, the sidebar form, the document and the
//! gesture in progress. Handlers borrow it mutably, one callback at a time,
//! so the tool and the counter always have a single writer.
//!
//! # Flow of one gesture
//!
//! 1. [`EditorContext::on_pointer_down`] writes the press position into the
//!    x/y fields, then runs the dispatcher
//!    ([`EditorContext::handle_pointer_down`]) with the shape under the
//!    pointer.
//! 2. The dispatcher either creates a shape from the form as it is *now*,
//!    or recolors the clicked shape.
//! 3. [`EditorContext::on_pointer_up`] stages width/height, radius or line
//!    endpoints in the form for the *next* creation.
//!
//! Nothing here reports failure to the caller. Unusable input is logged
//! and skipped.

use egui::{Color32, Pos2};

use super::EditorState;
use crate::command::Command;
use crate::config::SketchConfig;
use crate::document::Document;
use crate::element::{factory, ElementId, ElementType, ShapeKind};
use crate::form::{parse_color, DrawingParams, FieldId, FormState};
use crate::id_generator::ElementCounter;
use crate::input::{stage_release, InputEvent, PointerSample, ReleaseOutcome};
use crate::tools::Tool;

/// The main context for the drawing editor.
#[derive(Debug, Clone)]
pub struct EditorContext {
    /// Active tool; `None` after an unrecognized tool name
    tool: Option<Tool>,
    counter: ElementCounter,
    /// Sidebar form, edited directly by the UI
    pub form: FormState,
    document: Document,
    state: EditorState,
    /// Shape last picked with the select tool
    selection: Option<ElementId>,
    last_command: Option<String>,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl EditorContext {
    pub fn new(config: &SketchConfig) -> Self {
        let mut ctx = Self {
            tool: None,
            counter: ElementCounter::new(),
            form: config.form.clone(),
            document: Document::new(),
            state: EditorState::Idle,
            selection: None,
            last_command: None,
        };
        ctx.set_tool(config.initial_tool);
        ctx
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.tool
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn counter(&self) -> &ElementCounter {
        &self.counter
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn selection(&self) -> Option<&ElementType> {
        self.selection.and_then(|id| self.document.find_element_by_id(id))
    }

    /// Description of the last command applied to the document
    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    /// Make `tool` the active tool. The text-input field is shown only for
    /// the text tool.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != Some(tool) {
            log::info!("Tool changed: {:?} -> {}", self.tool.map(|t| t.name()), tool);
        }
        self.tool = Some(tool);
        self.form.text_input_visible = tool == Tool::Text;
    }

    /// Select a tool by its button name.
    ///
    /// An unknown name leaves no tool active: pointer presses then do
    /// nothing and the text field is hidden.
    pub fn set_tool_by_name(&mut self, name: &str) -> Option<Tool> {
        match Tool::from_name(name) {
            Some(tool) => self.set_tool(tool),
            None => {
                log::warn!("Unknown tool {:?}, no tool active", name);
                self.tool = None;
                self.form.text_input_visible = false;
            }
        }
        self.tool
    }

    /// Route one canvas event. `surface_origin` is the canvas' top-left
    /// corner in window coordinates.
    pub fn handle_event(&mut self, event: &InputEvent, surface_origin: Pos2) {
        match event {
            InputEvent::PointerDown(sample) => {
                self.on_pointer_down(sample, surface_origin);
            }
            InputEvent::PointerUp(sample) => {
                self.on_pointer_up(sample, surface_origin);
            }
            InputEvent::PointerMove(_) => {}
        }
    }

    /// Press over the canvas: capture the position, then dispatch against
    /// the shape under the pointer (if any).
    pub fn on_pointer_down(&mut self, sample: &PointerSample, surface_origin: Pos2) -> Option<ElementId> {
        let pos = sample.surface_position(surface_origin);
        self.capture_pointer_down(pos);
        let target = self.document.element_at(pos);
        self.handle_pointer_down(target)
    }

    /// Write the press position into the x/y fields and start a gesture
    pub fn capture_pointer_down(&mut self, pos: Pos2) {
        log::debug!("Pointer down at ({}, {})", pos.x, pos.y);
        self.form.set_number(FieldId::X, pos.x);
        self.form.set_number(FieldId::Y, pos.y);
        self.state = EditorState::Pressed { down: pos };
    }

    /// Release: derive the size fields for the active tool
    pub fn on_pointer_up(&mut self, sample: &PointerSample, surface_origin: Pos2) -> ReleaseOutcome {
        let pos = sample.surface_position(surface_origin);
        self.capture_pointer_up(pos)
    }

    pub fn capture_pointer_up(&mut self, pos: Pos2) -> ReleaseOutcome {
        let Some(down) = self.state.pressed_at() else {
            log::debug!("Pointer up without a press on the canvas, ignored");
            return ReleaseOutcome::Ignored;
        };
        self.state = EditorState::Idle;

        let outcome = stage_release(self.tool, down, pos, &mut self.form);
        log::debug!("Pointer up at ({}, {}): {:?}", pos.x, pos.y, outcome);
        outcome
    }

    /// The dispatcher: decide what a press does based on the active tool
    /// alone. Shape tools ignore `target`.
    ///
    /// Returns the created or restyled shape.
    pub fn handle_pointer_down(&mut self, target: Option<ElementId>) -> Option<ElementId> {
        match self.tool? {
            Tool::Fill => self.fill(target?),
            Tool::Select => self.select(target?),
            Tool::Rect => Some(self.create_shape(ShapeKind::Rect)),
            Tool::Circle => Some(self.create_shape(ShapeKind::Circle)),
            Tool::Text => Some(self.create_shape(ShapeKind::Text)),
            Tool::Line => Some(self.create_shape(ShapeKind::Line)),
        }
    }

    /// Build one shape from the current form and append it.
    ///
    /// The counter advances by exactly one per call, whatever the kind.
    pub fn create_shape(&mut self, kind: ShapeKind) -> ElementId {
        let id = self.counter.generate_id(kind);
        let params = DrawingParams::read(&self.form);
        let element = factory::create(kind, id, &params);
        log::info!("Created {}", id);
        self.apply(Command::AddElement(element));
        id
    }

    /// Fill-tool entry point; does nothing under any other tool
    pub fn fill(&mut self, target: ElementId) -> Option<ElementId> {
        if self.tool != Some(Tool::Fill) {
            return None;
        }
        self.recolor(target)
    }

    /// Select-tool entry point; recolors `target` and makes it the selection
    pub fn select(&mut self, target: ElementId) -> Option<ElementId> {
        if self.tool != Some(Tool::Select) {
            return None;
        }
        let recolored = self.recolor(target)?;
        self.selection = Some(recolored);
        Some(recolored)
    }

    /// Apply the form's fill and stroke colours to `target` as style.
    ///
    /// Only acts while the fill or select tool is active, since every shape
    /// keeps its click handler whatever the tool. A colour field that does
    /// not parse leaves that property unchanged.
    pub fn recolor(&mut self, target: ElementId) -> Option<ElementId> {
        if !self.tool.is_some_and(|tool| tool.recolors()) {
            return None;
        }
        let command = Command::Recolor {
            element_id: target,
            fill: self.form_color(FieldId::Color),
            stroke: self.form_color(FieldId::Stroke),
        };
        self.apply(command).then_some(target)
    }

    fn form_color(&self, field: FieldId) -> Option<Color32> {
        parse_color(self.form.get(field))
            .inspect_err(|err| log::warn!("Ignoring {} style: {}", field.key(), err))
            .ok()
    }

    fn apply(&mut self, command: Command) -> bool {
        match command.execute(&mut self.document) {
            Ok(()) => {
                self.last_command = Some(command.describe());
                true
            }
            Err(err) => {
                log::warn!("{} failed: {}", command.describe(), err);
                false
            }
        }
    }

    /// Look up a shape by id; convenience for the UI and tests
    pub fn element(&self, id: ElementId) -> Option<&ElementType> {
        self.document.find_element_by_id(id)
    }

    /// Id the next created shape will carry, for display
    pub fn next_serial(&self) -> u64 {
        self.counter.peek()
    }

    /// Shape currently under a canvas position
    pub fn element_at(&self, pos: Pos2) -> Option<&ElementType> {
        self.document
            .element_at(pos)
            .and_then(|id| self.document.find_element_by_id(id))
    }
}
