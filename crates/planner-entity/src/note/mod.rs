//! Note records.

pub mod model;

pub use model::{CreateNote, DEFAULT_CATEGORY, Note, UpdateNote, normalize_tags};
