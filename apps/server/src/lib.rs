//! Coindeck server library - exposed for the binary and the handler tests.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
