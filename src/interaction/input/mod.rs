use bevy::prelude::*;

use crate::core::components::{ButtonState, PlayButton};
use crate::core::config::GameConfig;
use crate::core::system::system_order::InputSet;

/// Written on the pointer-release edge when the pointer lands on a button.
#[derive(Event, Debug, Clone, Copy)]
pub struct ButtonPressed {
    pub entity: Entity,
}

pub struct PointerDispatchPlugin;

impl Plugin for PointerDispatchPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ButtonPressed>()
            .add_systems(Update, dispatch_pointer_release.in_set(InputSet));
    }
}

fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// Screen position for the release edge. A touch that ended this frame has
/// already left the active set, so the just-released list is checked first;
/// the cursor is the mouse fallback.
pub fn release_screen_pos(cursor: Option<Vec2>, touches: &Touches) -> Option<Vec2> {
    touches
        .iter_just_released()
        .next()
        .map(|t| t.position())
        .or_else(|| touches.iter().next().map(|t| t.position()))
        .or(cursor)
}

fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let screen_pos = release_screen_pos(window.cursor_position(), touches)?;
    cursor_world_pos(camera_q, screen_pos)
}

const DIST_EPS: f32 = 1e-4; // distance squared epsilon for tie-breaking

/// Nearest-button pick over `(entity, center, pick_radius)` candidates.
/// Ties break toward the lower entity index for determinism.
pub fn pick_button<I>(world_pos: Vec2, iter: I) -> Option<(Entity, f32)>
where
    I: IntoIterator<Item = (Entity, Vec2, f32)>,
{
    let mut best: Option<(Entity, f32)> = None;
    for (entity, center, pick_radius) in iter {
        let delta = world_pos - center;
        if !delta.x.is_finite() || !delta.y.is_finite() {
            continue;
        }
        let d2 = delta.length_squared();
        if d2 > pick_radius * pick_radius {
            continue;
        }
        let replace = match best {
            None => true,
            Some((best_entity, bd2)) => {
                if d2 + DIST_EPS < bd2 {
                    true
                } else if (d2 - bd2).abs() <= DIST_EPS {
                    entity.index() < best_entity.index()
                } else {
                    false
                }
            }
        };
        if replace {
            best = Some((entity, d2));
        }
    }
    best
}

/// Stateless per frame: on the primary release edge, project the pointer into
/// world space and forward the hit to the button via `ButtonPressed`.
fn dispatch_pointer_release(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    q_buttons: Query<(Entity, &Transform, &Visibility), (With<PlayButton>, With<ButtonState>)>,
    cfg: Res<GameConfig>,
    mut ew: EventWriter<ButtonPressed>,
) {
    let released =
        buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some();
    if !released {
        return;
    }
    let Ok(window) = windows_q.single() else {
        return;
    };
    let Some(world_pos) = primary_pointer_world_pos(window, &touches, &camera_q) else {
        return;
    };
    let base_radius = cfg.button.size * 0.5 * cfg.button.pick_radius_pad.max(0.0);
    let iter = q_buttons.iter().filter_map(|(e, tf, vis)| {
        if *vis == Visibility::Hidden {
            return None;
        }
        let center = tf.translation.truncate();
        Some((e, center, base_radius * tf.scale.x.max(0.0)))
    });
    if let Some((entity, _d2)) = pick_button(world_pos, iter) {
        ew.write(ButtonPressed { entity });
    }
}
