//! Job board front end: the listing view lifecycle and the CLI that
//! drives it.
//!
//! The interesting piece is [`view::JobBoard`], which owns the listing
//! state machine (`NotLoaded -> Loading -> Loaded | Failed`) and keeps
//! it consistent under concurrent mounts, refreshes, and unmounts. The
//! board talks to the backend through the [`source::JobSource`] trait
//! so tests can script fetch outcomes without a server.

pub mod config;
pub mod source;
pub mod view;

pub use config::BoardConfig;
pub use source::JobSource;
pub use view::{JobBoard, ListState};
