pub mod config;

pub use config::{ButtonConfig, DownloadConfig, GameConfig, SessionConfig, WindowConfig};
