//! Utilities shared by the Chatline packages.

pub mod logger;
pub mod time;
