//! In-memory providers backed by `dashmap`.
//!
//! Used for development and tests. Data lives only as long as the process.

pub mod event;
pub mod note;
pub mod share;
pub mod todo;

pub use event::MemoryEventRepository;
pub use note::MemoryNoteRepository;
pub use share::MemoryShareRepository;
pub use todo::MemoryTodoRepository;
