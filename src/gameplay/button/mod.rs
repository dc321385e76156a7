use bevy::prelude::*;

use crate::core::components::{
    ButtonBackground, ButtonForeground, ButtonState, ImageViewer, PlayButton,
};
use crate::core::config::{ButtonConfig, GameConfig};
use crate::core::system::system_order::AnimationSet;
use crate::gameplay::download::{DownloadStart, DownloadState};
use crate::interaction::input::ButtonPressed;
use crate::rendering::button_scene::ButtonAssets;

pub struct ButtonPlugin;

impl Plugin for ButtonPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ButtonPressed>()
            .add_event::<DownloadStart>()
            .init_resource::<DownloadState>()
            .add_systems(
                Update,
                (handle_button_pressed, run_click_sequences, resize_viewer)
                    .chain()
                    .in_set(AnimationSet),
            );
    }
}

/// Sequence phases, in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SequencePhase {
    PendingGrow,
    PendingShrink,
    PendingHold,
    ProgressFade,
    ProgressHold,
    ReadyTransition,
}

/// The cooperative click sequence: attached on the initial click, advanced
/// once per frame, removed when the terminal state is reached.
#[derive(Component, Debug)]
pub struct ClickSequence {
    pub phase: SequencePhase,
    pub phase_elapsed: f32,
    pub pending_frame_counter: u32,
    pub scale: f32,
    pub alpha: f32,
}

impl ClickSequence {
    pub fn new(params: &SequenceParams) -> Self {
        Self {
            phase: SequencePhase::PendingGrow,
            phase_elapsed: 0.0,
            pending_frame_counter: 0,
            scale: params.min_scale,
            alpha: 1.0,
        }
    }

    fn enter(&mut self, phase: SequencePhase) {
        self.phase = phase;
        self.phase_elapsed = 0.0;
    }
}

/// Clamped copy of the button tunables used by the sequence math.
#[derive(Debug, Clone, Copy)]
pub struct SequenceParams {
    pub transition_duration: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub min_opacity: f32,
    pub pending_swap_slowdown: u32,
    pub pending_hold: f32,
    pub progress_hold: f32,
}

impl SequenceParams {
    pub fn from_config(cfg: &ButtonConfig) -> Self {
        let min_scale = cfg.min_scale.max(0.01);
        Self {
            transition_duration: cfg.transition_duration.max(0.01),
            min_scale,
            max_scale: cfg.max_scale.max(min_scale),
            min_opacity: cfg.min_opacity.clamp(0.0, 1.0),
            pending_swap_slowdown: cfg.pending_swap_slowdown.max(1),
            pending_hold: cfg.pending_hold.max(0.0),
            progress_hold: cfg.progress_hold.max(0.0),
        }
    }

    /// Scale units per second over a half transition.
    pub fn scale_speed(&self) -> f32 {
        (self.max_scale - self.min_scale) / (self.transition_duration / 2.0)
    }

    /// Alpha units per second while fading.
    pub fn fade_speed(&self) -> f32 {
        1.0 - self.min_opacity / self.transition_duration
    }
}

/// Per-step side effects the applying system forwards to the scene.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepOutput {
    pub pending_frame: Option<usize>,
    pub progress_frame: Option<usize>,
    /// 0..=1 interpolation of the background toward the ready color.
    pub background_lerp: Option<f32>,
    /// State entered this step, if any.
    pub entered: Option<ButtonState>,
    pub finished: bool,
}

/// One cooperative step of the click sequence. Pure so the phase ordering and
/// the scale/alpha bounds can be tested without an `App`.
pub fn advance(
    seq: &mut ClickSequence,
    p: &SequenceParams,
    dt: f32,
    pending_len: usize,
    progress_len: usize,
    download_progress: f32,
) -> StepOutput {
    let mut out = StepOutput::default();
    seq.phase_elapsed += dt;
    let half = p.transition_duration / 2.0;
    match seq.phase {
        SequencePhase::PendingGrow => {
            seq.scale = (seq.scale + dt * p.scale_speed()).min(p.max_scale);
            seq.alpha = (seq.alpha - dt * p.fade_speed()).max(p.min_opacity);
            if seq.phase_elapsed >= half {
                seq.enter(SequencePhase::PendingShrink);
            }
        }
        SequencePhase::PendingShrink => {
            seq.scale = (seq.scale - dt * p.scale_speed()).max(p.min_scale);
            seq.alpha = (seq.alpha - dt * p.fade_speed()).max(p.min_opacity);
            if seq.phase_elapsed >= half {
                seq.scale = p.min_scale;
                seq.alpha = 1.0;
                seq.enter(SequencePhase::PendingHold);
            }
        }
        SequencePhase::PendingHold => {
            seq.pending_frame_counter += 1;
            if pending_len > 0 {
                let idx = (seq.pending_frame_counter / p.pending_swap_slowdown) as usize;
                out.pending_frame = Some(idx % pending_len);
            }
            if seq.phase_elapsed >= p.pending_hold {
                out.entered = Some(ButtonState::DownloadProgress);
                seq.enter(SequencePhase::ProgressFade);
            }
        }
        SequencePhase::ProgressFade => {
            seq.alpha = (seq.alpha - dt * p.fade_speed()).max(p.min_opacity);
            if seq.phase_elapsed >= half {
                seq.alpha = 1.0;
                seq.enter(SequencePhase::ProgressHold);
            }
        }
        SequencePhase::ProgressHold => {
            if progress_len > 0 && p.progress_hold > 0.0 {
                let idx = ((seq.phase_elapsed / p.progress_hold) * progress_len as f32) as usize;
                out.progress_frame = Some(idx % progress_len);
            }
            // The download gates this phase; a stalled fetch stalls here.
            if seq.phase_elapsed >= p.progress_hold && download_progress >= 1.0 {
                seq.enter(SequencePhase::ReadyTransition);
            }
        }
        SequencePhase::ReadyTransition => {
            let t = (seq.phase_elapsed / p.transition_duration).clamp(0.0, 1.0);
            out.background_lerp = Some(t);
            if seq.phase_elapsed >= p.transition_duration {
                out.background_lerp = Some(1.0);
                out.entered = Some(ButtonState::ReadyToPlay);
                out.finished = true;
            }
        }
    }
    out
}

/// Componentwise interpolation in sRGB, like the original material cross-fade.
pub fn lerp_srgba(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let a = from.to_srgba();
    let b = to.to_srgba();
    Color::srgba(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
        a.alpha + (b.alpha - a.alpha) * t,
    )
}

/// Grow tween applied to the viewer after the terminal-state click.
#[derive(Component, Debug)]
pub struct ViewerResize {
    pub elapsed: f32,
    pub duration: f32,
}

fn handle_button_pressed(
    mut ev: EventReader<ButtonPressed>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut q: Query<(&mut ButtonState, &mut Visibility), With<PlayButton>>,
    mut q_viewer: Query<(Entity, &mut Visibility), (With<ImageViewer>, Without<PlayButton>)>,
) {
    for pressed in ev.read() {
        let Ok((mut state, mut vis)) = q.get_mut(pressed.entity) else {
            continue;
        };
        match *state {
            ButtonState::WaitingToDownload => {
                *state = ButtonState::DownloadPending;
                let params = SequenceParams::from_config(&cfg.button);
                commands
                    .entity(pressed.entity)
                    .insert(ClickSequence::new(&params));
                info!("button: click -> DownloadPending");
            }
            ButtonState::ReadyToPlay => {
                // Terminal state never changes; the click swaps displays.
                *vis = Visibility::Hidden;
                for (viewer, mut viewer_vis) in q_viewer.iter_mut() {
                    *viewer_vis = Visibility::Visible;
                    commands.entity(viewer).insert(ViewerResize {
                        elapsed: 0.0,
                        duration: cfg.button.ready_resize_duration.max(0.0),
                    });
                }
                info!("button: ready click -> image viewer");
            }
            // Clicks mid-sequence are ignored.
            ButtonState::DownloadPending | ButtonState::DownloadProgress => {}
        }
    }
}

fn run_click_sequences(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    download: Res<DownloadState>,
    assets: Option<Res<ButtonAssets>>,
    mut commands: Commands,
    mut ew_download: EventWriter<DownloadStart>,
    mut q: Query<
        (
            Entity,
            &mut ClickSequence,
            &mut ButtonState,
            &mut Transform,
            &Children,
        ),
        With<PlayButton>,
    >,
    mut q_fg: Query<&mut Sprite, (With<ButtonForeground>, Without<ButtonBackground>)>,
    mut q_bg: Query<&mut Sprite, (With<ButtonBackground>, Without<ButtonForeground>)>,
) {
    let params = SequenceParams::from_config(&cfg.button);
    let (pending_len, progress_len) = assets
        .as_ref()
        .map(|a| (a.pending_frames.len(), a.progress_frames.len()))
        .unwrap_or((0, 0));
    let dt = time.delta_secs();

    for (entity, mut seq, mut state, mut tf, children) in q.iter_mut() {
        let out = advance(
            &mut seq,
            &params,
            dt,
            pending_len,
            progress_len,
            download.progress,
        );
        tf.scale = Vec3::splat(seq.scale);

        for child in children.iter() {
            if let Ok(mut fg) = q_fg.get_mut(child) {
                fg.color = fg.color.with_alpha(seq.alpha);
                if let Some(a) = assets.as_ref() {
                    if let Some(i) = out.pending_frame {
                        if let Some(h) = a.pending_frames.get(i) {
                            fg.image = h.clone();
                        }
                    }
                    if let Some(i) = out.progress_frame {
                        if let Some(h) = a.progress_frames.get(i) {
                            fg.image = h.clone();
                        }
                    }
                    if out.finished {
                        fg.image = a.ready.clone();
                    }
                }
            } else if let Ok(mut bg) = q_bg.get_mut(child) {
                if let Some(t) = out.background_lerp {
                    bg.color =
                        lerp_srgba(cfg.button.pending_color(), cfg.button.ready_color(), t);
                }
            }
        }

        if let Some(next) = out.entered {
            *state = next;
            if next == ButtonState::DownloadProgress {
                ew_download.write(DownloadStart);
                info!("button: pending hold complete -> DownloadProgress");
            }
        }
        if out.finished {
            info!("button: sequence complete -> ReadyToPlay");
            commands.entity(entity).remove::<ClickSequence>();
        }
    }
}

fn resize_viewer(
    time: Res<Time>,
    mut commands: Commands,
    download: Res<DownloadState>,
    mut q: Query<(Entity, &mut Transform, &mut ViewerResize, &mut Sprite), With<ImageViewer>>,
) {
    let dt = time.delta_secs();
    for (entity, mut tf, mut rz, mut sprite) in q.iter_mut() {
        if let Some(h) = &download.image {
            if sprite.image != *h {
                sprite.image = h.clone();
            }
        }
        rz.elapsed += dt;
        let t = (rz.elapsed / rz.duration.max(f32::EPSILON)).clamp(0.0, 1.0);
        tf.scale = Vec3::splat(0.2 + 0.8 * t);
        if rz.elapsed >= rz.duration {
            tf.scale = Vec3::splat(1.0);
            commands.entity(entity).remove::<ViewerResize>();
        }
    }
}
