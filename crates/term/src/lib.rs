//! Terminal rendering module.
//!
//! Paints a [`GameSnapshot`](crate::core::GameSnapshot) into a styled
//! framebuffer ([`BoardView`]) and flushes it to the terminal with crossterm
//! ([`TerminalRenderer`]). The engine never sees any of this; it only hands
//! out snapshots.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use stacktris_core as core;
pub use stacktris_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{encode_diff, encode_full, TerminalRenderer};
