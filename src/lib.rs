//! Library entry for scoops exposing the catalog core and the TUI layers
//! for the binary and integration tests.

pub mod app;
pub mod args;
pub mod catalog;
pub mod events;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
