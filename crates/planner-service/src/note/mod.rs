//! Note use cases.

pub mod service;

pub use service::NoteService;
