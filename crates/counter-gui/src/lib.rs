//! Click Counter - GUI Library
//!
//! Application types for the Click Counter desktop application. The widget
//! logic itself lives in `counter-model`; this crate is the Iced shell
//! around it.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod error;
pub mod handler;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;
