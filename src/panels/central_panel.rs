use egui::{CentralPanel, Context, Rect, ScrollArea, Sense};

use crate::input::InputHandler;
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// The drawing canvas: feeds pointer events to the editor and paints it
pub fn central_panel(
    editor: &mut EditorContext,
    input: &mut InputHandler,
    renderer: &Renderer,
    ctx: &Context,
) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::both().show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(renderer.canvas_size(), Sense::click_and_drag());
            let canvas_rect: Rect = response.rect;

            for event in input.process_input(ctx, canvas_rect, response.hovered()) {
                editor.handle_event(&event, canvas_rect.min);
            }

            let hover = input
                .last_pointer_pos()
                .map(|pos| (pos - canvas_rect.min).to_pos2().round());
            renderer.render(&painter, canvas_rect, editor, hover);
        });
    });
}
