//! Calendar event use cases.

pub mod service;

pub use service::EventService;
