//! Host input: pointer coordinates and application events

pub mod pointer;
pub mod events;

pub use events::{AppEvent, EventQueue, EventSender, Spawn};
pub use pointer::Viewport;
