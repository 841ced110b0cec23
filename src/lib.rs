// lib.rs - Library root for the edoc editor shell

pub mod buffer;
pub mod cli;
pub mod color;
pub mod config;
pub mod cursor;
pub mod debounce;
pub mod language;
pub mod line_ending;
pub mod session;
pub mod size;
pub mod status;
pub mod theme;
