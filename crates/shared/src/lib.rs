//! Annotation core for the map sketcher.
//!
//! Taps on the map become an ordered path, a path closed at one of its
//! vertices becomes a stored shape, and the visible region is zoomed and
//! panned alongside. Everything here is synchronous in-memory state; the map
//! surface feeds [`session::Event`]s in and draws the [`session::Scene`] out.

pub mod config;
pub mod error;
pub mod models;
pub mod path;
pub mod projection;
pub mod session;
pub mod shapes;
pub mod viewport;
