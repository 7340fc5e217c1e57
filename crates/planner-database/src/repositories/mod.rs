//! Repository traits, one per record type.
//!
//! Each trait has a PostgreSQL implementation in [`crate::postgres`] and an
//! in-memory implementation in [`crate::memory`].

pub mod event;
pub mod note;
pub mod share;
pub mod todo;

pub use event::EventRepository;
pub use note::NoteRepository;
pub use share::ShareRepository;
pub use todo::TodoRepository;
