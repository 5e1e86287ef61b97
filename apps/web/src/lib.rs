#![recursion_limit = "512"]

pub mod app;
pub mod components;
pub mod content;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod scroll;

#[cfg(feature = "ssr")]
pub mod shell;

// Re-export for convenience
pub use app::App;
