#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod form;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod tools;

pub use app::SketchApp;
pub use command::Command;
pub use config::SketchConfig;
pub use document::Document;
pub use element::{Element, ElementId, ElementType, ShapeKind};
pub use error::{SketchError, SketchResult};
pub use form::{DrawingParams, FieldId, FormState};
pub use input::{InputEvent, PointerSample};
pub use renderer::Renderer;
pub use state::{EditorContext, EditorState};
pub use tools::Tool;
