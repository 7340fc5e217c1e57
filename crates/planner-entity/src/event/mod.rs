//! Calendar event records.

pub mod model;

pub use model::{CreateEvent, DEFAULT_EVENT_COLOR, Event, UpdateEvent};
