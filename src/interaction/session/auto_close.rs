use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Absolute shutdown deadline, seconds since startup. Only inserted when the
/// session is configured to auto close.
#[derive(Resource, Debug, Clone, Copy)]
struct CloseDeadline(f64);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_deadline)
            .add_systems(Update, enforce_deadline);
    }
}

fn arm_deadline(mut commands: Commands, cfg: Res<GameConfig>) {
    let after = cfg.session.auto_close_after;
    if after > 0.0 {
        info!("session: auto close armed, exiting after {after}s");
        commands.insert_resource(CloseDeadline(after as f64));
    }
}

fn enforce_deadline(
    time: Res<Time>,
    deadline: Option<Res<CloseDeadline>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(deadline) = deadline else {
        return;
    };
    if time.elapsed_secs_f64() >= deadline.0 {
        info!("session: auto close deadline reached");
        ev_exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app_with(after: f32) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let mut cfg = GameConfig::default();
        cfg.session.auto_close_after = after;
        app.insert_resource(cfg);
        app.add_plugins(AutoClosePlugin);
        app
    }

    #[test]
    fn zero_leaves_session_unarmed() {
        let mut app = app_with(0.0);
        app.update();
        assert!(app.world().get_resource::<CloseDeadline>().is_none());
    }

    #[test]
    fn deadline_requests_exit() {
        let mut app = app_with(1e-6);
        app.update(); // arms the deadline
        std::thread::sleep(Duration::from_millis(5));
        app.update();
        let exits = app.world().resource::<Events<AppExit>>();
        let mut cursor = exits.get_cursor();
        assert!(
            cursor.read(exits).next().is_some(),
            "expected an AppExit event after the deadline"
        );
    }
}
