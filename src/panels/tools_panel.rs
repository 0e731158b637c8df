use egui::{Context, Grid, SidePanel, TextEdit, Ui};

use crate::components::ToolButton;
use crate::element::{color_to_hex, Element};
use crate::form::{FieldId, FormState};
use crate::state::EditorContext;
use crate::tools::Tool;

/// Sidebar: tool buttons, the drawing form and the selection details
pub fn tools_panel(editor: &mut EditorContext, ctx: &Context) {
    SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = editor.active_tool();
            for tool in Tool::ALL {
                if ToolButton::new(tool, active == Some(tool)).show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", tool);
                    editor.set_tool(tool);
                }
            }

            ui.separator();
            ui.heading("Shape");
            form_fields(ui, &mut editor.form);

            ui.separator();
            selection_details(ui, editor);

            ui.separator();
            ui.label(format!("Shapes: {}", editor.document().len()));
            ui.label(format!("Next id: {}", editor.next_serial()));
        });
}

fn form_fields(ui: &mut Ui, form: &mut FormState) {
    Grid::new("form_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for field in FieldId::ALL {
                if field == FieldId::TextIn && !form.text_input_visible {
                    continue;
                }
                ui.label(field_label(field));
                match field {
                    FieldId::Stroke | FieldId::Color => color_field(ui, form.get_mut(field)),
                    _ => {
                        ui.add(TextEdit::singleline(form.get_mut(field)).desired_width(90.0));
                    }
                }
                ui.end_row();
            }
        });
}

/// Text field with a colour swatch that writes back `#rrggbb`
fn color_field(ui: &mut Ui, value: &mut String) {
    ui.horizontal(|ui| {
        if let Ok(mut color) = egui::Color32::from_hex(value.trim()) {
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                *value = color_to_hex(color);
            }
        }
        ui.add(TextEdit::singleline(value).desired_width(70.0));
    });
}

fn field_label(field: FieldId) -> &'static str {
    match field {
        FieldId::X => "X",
        FieldId::Y => "Y",
        FieldId::Width => "Width",
        FieldId::Height => "Height",
        FieldId::Radius => "Radius",
        FieldId::Stroke => "Stroke",
        FieldId::StrokeWidth => "Stroke width",
        FieldId::Color => "Fill",
        FieldId::TextIn => "Text",
    }
}

fn selection_details(ui: &mut Ui, editor: &EditorContext) {
    ui.strong("Selected object");
    let Some(element) = editor.selection() else {
        ui.label("None");
        return;
    };
    let pos = element.position();
    ui.label(element.id().to_string());
    ui.label(format!(
        "Fill: {}",
        element.effective_fill().map(color_to_hex).unwrap_or_else(|| "none".to_owned())
    ));
    ui.label(format!(
        "Stroke: {}",
        element.effective_stroke().map(color_to_hex).unwrap_or_else(|| "none".to_owned())
    ));
    ui.label(format!("Position: ({}, {})", pos.x, pos.y));
}
