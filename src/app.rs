use crate::config::SketchConfig;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// The drawing app. Nothing is persisted between runs.
#[derive(Debug)]
pub struct SketchApp {
    editor: EditorContext,
    renderer: Renderer,
    input: InputHandler,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        Self::from_config(&config)
    }

    pub fn from_config(config: &SketchConfig) -> Self {
        let [width, height] = config.canvas_size;
        Self {
            editor: EditorContext::new(config),
            renderer: Renderer::new(egui::vec2(width, height)),
            input: InputHandler::new(),
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(&mut self.editor, ctx);
        panels::status_bar(&self.editor, ctx);
        panels::central_panel(&mut self.editor, &mut self.input, &self.renderer, ctx);
    }
}
