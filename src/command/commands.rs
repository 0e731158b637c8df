use egui::Color32;

use super::{CommandError, CommandResult};
use crate::document::Document;
use crate::element::{Element, ElementId, ElementType};

/// The mutations a pointer gesture can make to the document
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a freshly created shape
    AddElement(ElementType),

    /// Restyle an existing shape. `None` leaves that property as it is.
    Recolor {
        element_id: ElementId,
        fill: Option<Color32>,
        stroke: Option<Color32>,
    },
}

impl Command {
    /// Execute the command against the document
    pub fn execute(&self, document: &mut Document) -> CommandResult {
        match self {
            Command::AddElement(element) => {
                let id = element.id();
                if document.find_element_by_id(id).is_some() {
                    return Err(CommandError::DuplicateElement(id));
                }
                document.add_element(element.clone());
                Ok(())
            }

            Command::Recolor { element_id, fill, stroke } => {
                let element = document
                    .find_element_by_id_mut(*element_id)
                    .ok_or(CommandError::ElementNotFound(*element_id))?;
                element.recolor(*fill, *stroke);
                Ok(())
            }
        }
    }

    /// Short label for logs and the status bar
    pub fn describe(&self) -> String {
        match self {
            Command::AddElement(element) => format!("Add {}", element.id()),
            Command::Recolor { element_id, .. } => format!("Recolor {}", element_id),
        }
    }
}
