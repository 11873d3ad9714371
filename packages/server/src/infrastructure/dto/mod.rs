//! Data Transfer Objects (DTOs) for wire formats.
//!
//! - `websocket`: frames exchanged over the chat WebSocket
//! - `http`: HTTP API responses
//! - `conversion`: DTO ⇔ domain conversions

pub mod conversion;
pub mod http;
pub mod websocket;
