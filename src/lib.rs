pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::components::{ButtonState, PlayButton};
pub use crate::core::config::{ButtonConfig, DownloadConfig, GameConfig, SessionConfig, WindowConfig};
