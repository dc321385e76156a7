use anyhow::{Context, Result};
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::tasks::futures_lite::future;
use bevy::tasks::{IoTaskPool, Task};

use crate::core::config::GameConfig;
use crate::core::system::system_order::AnimationSet;

/// Fired once, when the sequence enters its download phase.
#[derive(Event, Debug, Default, Clone, Copy)]
pub struct DownloadStart;

/// Polled by the click sequence; `progress` gates the ready transition.
#[derive(Resource, Debug, Default)]
pub struct DownloadState {
    pub started: bool,
    /// 0..=1 completion fraction. Stays below 1.0 forever on failure; there
    /// is no retry or timeout policy.
    pub progress: f32,
    pub failed: bool,
    pub image: Option<Handle<Image>>,
}

#[derive(Component)]
struct FetchTask(Task<Result<Vec<u8>>>);

pub struct DownloadPlugin;

impl Plugin for DownloadPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DownloadStart>()
            .init_resource::<DownloadState>()
            .add_systems(
                Update,
                (start_download, advance_simulated, poll_fetch).in_set(AnimationSet),
            );
    }
}

fn start_download(
    mut ev: EventReader<DownloadStart>,
    mut state: ResMut<DownloadState>,
    cfg: Res<GameConfig>,
    mut commands: Commands,
) {
    if ev.is_empty() {
        return;
    }
    ev.clear();
    // One download per session.
    if state.started {
        return;
    }
    state.started = true;
    if cfg.download.simulate {
        info!(
            "download: simulating fetch over {}s",
            cfg.download.sim_duration
        );
        return;
    }
    let url = cfg.download.url.clone();
    info!("download: GET {url}");
    let task = IoTaskPool::get().spawn(async move { fetch_bytes(&url) });
    commands.spawn(FetchTask(task));
}

fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let resp = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("GET {url}"))?;
    Ok(resp.bytes().context("read body")?.to_vec())
}

fn advance_simulated(time: Res<Time>, cfg: Res<GameConfig>, mut state: ResMut<DownloadState>) {
    if !state.started || !cfg.download.simulate || state.progress >= 1.0 {
        return;
    }
    let dur = cfg.download.sim_duration;
    if dur <= 0.0 {
        state.progress = 1.0;
        return;
    }
    state.progress = (state.progress + time.delta_secs() / dur).min(1.0);
}

fn poll_fetch(
    mut commands: Commands,
    mut state: ResMut<DownloadState>,
    mut images: ResMut<Assets<Image>>,
    mut q: Query<(Entity, &mut FetchTask)>,
) {
    for (entity, mut task) in q.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };
        commands.entity(entity).despawn();
        match result.and_then(|bytes| image_from_bytes(&bytes)) {
            Ok(img) => {
                state.image = Some(images.add(img));
                state.progress = 1.0;
                info!("download: asset fetched and decoded");
            }
            Err(e) => {
                // The sequence stalls in its progress phase; progress never
                // reaches 1.0.
                state.failed = true;
                error!("download: {e:#}");
            }
        }
    }
}

/// Decode fetched bytes (PNG etc.) into a GPU-uploadable texture.
pub fn image_from_bytes(bytes: &[u8]) -> Result<Image> {
    let decoded = image::load_from_memory(bytes)
        .context("decode image")?
        .into_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        decoded.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    ))
}
