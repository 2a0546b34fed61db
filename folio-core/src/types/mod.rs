//! Document types shared by the loaders and the reader views

mod document;

pub use document::{display_name, PagedDocument, TextDocument, UnitKind};
