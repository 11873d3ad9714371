//! Request handlers.

mod http;
mod websocket;

pub use http::{get_connections, get_username, health_check, load_history};
pub use websocket::websocket_handler;
