//! Core traits defined in `planner-core` and implemented by other crates.

pub mod mailer;

pub use mailer::{MailMessage, Mailer};
