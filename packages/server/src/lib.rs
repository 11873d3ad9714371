//! Chatline chat fan-out server library.
//!
//! WebSocket clients bind an identity, send chat lines that are appended to a
//! history store and published on a broadcast bus, and a single fan-out
//! listener writes every published line to all registered connections.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
