//! View functions.
//!
//! Views are pure functions from state to Iced elements; all interaction
//! flows back through `Message`.

mod counter;

pub use counter::view_app;
