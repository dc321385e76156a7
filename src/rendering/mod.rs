pub mod button_scene;
pub mod camera;
