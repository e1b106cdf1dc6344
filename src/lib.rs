pub mod color;
pub mod config;
pub mod data;
pub mod format;
pub mod interact;
pub mod logging;
pub mod render;
pub mod scale;
