pub mod button;
pub mod download;
