//! Typed document model: elements, documents and outline sections.

mod document;
mod element;
mod section;

pub use document::Document;
pub use element::{Attributes, Content, Element, ElementKind};
pub use section::Section;
