//! Terminal input module.
//!
//! Maps `crossterm` key events onto engine [`Command`](crate::core::Command)s.
//! Keys are fixed; there is no repeat handling beyond what the terminal
//! delivers.

pub mod map;

pub use stacktris_core as core;
pub use stacktris_types as types;

pub use map::{handle_key_event, should_quit};
