//! # planner-service
//!
//! Business logic service layer for Planner. Services orchestrate the
//! repositories from `planner-database` and the mail transports defined
//! here to implement application use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod event;
pub mod mail;
pub mod note;
pub mod share;
pub mod todo;

pub use event::EventService;
pub use mail::MailManager;
pub use note::NoteService;
pub use share::{ContentResolver, ShareNotifier, ShareService};
pub use todo::TodoService;
