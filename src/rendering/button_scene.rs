use bevy::prelude::*;

use crate::core::components::{
    ButtonBackground, ButtonForeground, ButtonState, ImageViewer, PlayButton,
};
use crate::core::config::GameConfig;

// Z layering within the widget
const BACKGROUND_Z: f32 = 0.0;
const FOREGROUND_Z: f32 = 0.1;
const VIEWER_Z: f32 = 0.2;

/// Per-state frame handles, loaded once at startup from the config paths so
/// the animation systems never touch the asset server.
#[derive(Resource, Debug, Clone, Default)]
pub struct ButtonAssets {
    pub waiting: Handle<Image>,
    pub pending_frames: Vec<Handle<Image>>,
    pub progress_frames: Vec<Handle<Image>>,
    pub ready: Handle<Image>,
}

pub struct ButtonScenePlugin;

impl Plugin for ButtonScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonAssets>()
            .add_systems(Startup, (load_button_assets, spawn_button_scene).chain());
    }
}

fn load_frame(asset_server: &AssetServer, path: &str) -> Handle<Image> {
    if !std::path::Path::new("assets").join(path).exists() {
        warn!("button assets: '{path}' not found under assets/");
    }
    asset_server.load(path.to_owned())
}

fn load_button_assets(
    mut assets: ResMut<ButtonAssets>,
    asset_server: Res<AssetServer>,
    cfg: Res<GameConfig>,
) {
    let b = &cfg.button;
    if !b.waiting_frame.is_empty() {
        assets.waiting = load_frame(&asset_server, &b.waiting_frame);
    }
    if !b.ready_frame.is_empty() {
        assets.ready = load_frame(&asset_server, &b.ready_frame);
    }
    assets.pending_frames = b
        .pending_frames
        .iter()
        .map(|p| load_frame(&asset_server, p))
        .collect();
    assets.progress_frames = b
        .progress_frames
        .iter()
        .map(|p| load_frame(&asset_server, p))
        .collect();
}

fn spawn_button_scene(mut commands: Commands, cfg: Res<GameConfig>, assets: Res<ButtonAssets>) {
    let b = &cfg.button;
    let size = Vec2::splat(b.size.max(1.0));

    commands
        .spawn((
            PlayButton,
            ButtonState::WaitingToDownload,
            Transform::from_xyz(0.0, 0.0, 0.0).with_scale(Vec3::splat(b.min_scale.max(0.01))),
            GlobalTransform::default(),
            Visibility::Visible,
        ))
        .with_children(|parent| {
            parent.spawn((
                ButtonBackground,
                Sprite::from_color(b.pending_color(), size),
                Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
            ));
            parent.spawn((
                ButtonForeground,
                Sprite {
                    image: assets.waiting.clone(),
                    custom_size: Some(size * 0.8),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, FOREGROUND_Z),
            ));
        });

    // Swapped in by the terminal-state click; hidden until then.
    commands.spawn((
        ImageViewer,
        Sprite {
            custom_size: Some(size * 2.0),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, VIEWER_Z),
        GlobalTransform::default(),
        Visibility::Hidden,
    ));
}
