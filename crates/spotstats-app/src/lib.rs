// Library root: re-exports all modules so integration tests and the binary
// share one public API.

pub mod app;
pub mod cli;
pub mod date;
pub mod loader;
pub mod render;
pub mod session;
pub mod source;
