pub mod api;
pub mod common;
pub mod config;
pub mod content;
pub mod frontend;
pub mod models;
pub mod state;
