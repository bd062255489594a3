pub mod bot;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod document;
pub mod io;
pub mod session;
pub mod ui;

pub use bot::Bot;
pub use document::chunker;
pub use document::segment;
