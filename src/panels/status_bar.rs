use egui::{Context, TopBottomPanel};

use crate::state::EditorContext;

/// Bottom bar with the active mode and the last document change
pub fn status_bar(editor: &EditorContext, ctx: &Context) {
    TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mode = editor.active_tool().map(|tool| tool.name()).unwrap_or("none");
            ui.label(format!("Mode: {mode}"));
            ui.separator();
            ui.label(format!("x: {}  y: {}", editor.form.x, editor.form.y));
            if let Some(command) = editor.last_command() {
                ui.separator();
                ui.label(command);
            }
        });
    });
}
