mod commands;

use thiserror::Error;

use crate::element::ElementId;

pub use commands::Command;

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    /// The target element is not in the document
    #[error("element {0} not found")]
    ElementNotFound(ElementId),
    /// The element already exists in the document
    #[error("element {0} already exists")]
    DuplicateElement(ElementId),
}
