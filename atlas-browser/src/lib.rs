//! Atlas browser library
//!
//! This crate contains the desktop browser's library surfaces used by the
//! executable in `src/main.rs`: application glue around the iced runtime,
//! the update loop, and the presentational table. The list semantics
//! (filtering, sorting, pagination) live in `atlas-model`.
//!
//! Notes
//! - Most consumers should use the `atlas-browser` binary; the library is
//!   exposed mainly to enable testing and internal reuse.

pub mod api_client;
pub mod app;
pub mod message;
pub mod state;
pub mod update;
pub mod updates;
pub mod view;
