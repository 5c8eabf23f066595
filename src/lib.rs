//! stacktris (workspace facade crate).
//!
//! Re-exports the member crates under one roof
//! (`stacktris::{core,input,term,types}`) and holds the driver's
//! configuration and event log.

pub mod config;
pub mod event_log;

pub use stacktris_core as core;
pub use stacktris_input as input;
pub use stacktris_term as term;
pub use stacktris_types as types;
