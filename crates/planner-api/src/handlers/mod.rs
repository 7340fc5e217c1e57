//! HTTP request handlers, one module per resource.

pub mod event;
pub mod health;
pub mod note;
pub mod share;
pub mod todo;
