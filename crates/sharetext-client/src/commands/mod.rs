//! CLI command handlers.
//!
//! Each handler drives one of the flows against the configured server and
//! returns the text to print, so `main` only decides where it goes.

pub mod history;
pub mod send;
pub mod view;
