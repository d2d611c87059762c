//! Widget logic for the click counter.
//!
//! This crate holds everything the counter widget *is*, independent of how
//! it is drawn: the state record, its two transition functions, and the
//! declarative render contract a host UI layer draws from.
//!
//! # Module Organization
//!
//! - [`counter`]: the `Counter` state record and its transitions
//! - [`view`]: the `ViewModel` render contract and automation tags

pub mod counter;
pub mod view;

pub use counter::{Action, Counter};
pub use view::{AutomationTag, ButtonModel, ErrorLineModel, ViewModel};
