use std::time::Duration;

use bevy::prelude::*;

use play_button::core::components::{
    ButtonBackground, ButtonForeground, ButtonState, ImageViewer, PlayButton,
};
use play_button::gameplay::button::{ButtonPlugin, ClickSequence};
use play_button::gameplay::download::DownloadPlugin;
use play_button::interaction::input::ButtonPressed;
use play_button::GameConfig;

fn test_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(cfg);
    app.add_plugins(ButtonPlugin);
    app
}

fn spawn_button(app: &mut App, state: ButtonState) -> Entity {
    app.world_mut()
        .spawn((
            PlayButton,
            state,
            Transform::default(),
            GlobalTransform::default(),
            Visibility::Visible,
        ))
        .with_children(|parent| {
            parent.spawn((
                ButtonBackground,
                Sprite::default(),
                Transform::default(),
                GlobalTransform::default(),
            ));
            parent.spawn((
                ButtonForeground,
                Sprite::default(),
                Transform::default(),
                GlobalTransform::default(),
            ));
        })
        .id()
}

fn spawn_viewer(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            ImageViewer,
            Sprite::default(),
            Transform::default(),
            GlobalTransform::default(),
            Visibility::Hidden,
        ))
        .id()
}

#[test]
fn click_in_waiting_starts_sequence() {
    let mut app = test_app(GameConfig::default());
    let button = spawn_button(&mut app, ButtonState::WaitingToDownload);
    app.update();

    app.world_mut().send_event(ButtonPressed { entity: button });
    app.update();

    let state = *app.world().get::<ButtonState>(button).unwrap();
    assert_eq!(state, ButtonState::DownloadPending);
    assert!(
        app.world().get::<ClickSequence>(button).is_some(),
        "click in WaitingToDownload must attach the sequence"
    );
}

#[test]
fn clicks_mid_sequence_are_ignored() {
    let mut app = test_app(GameConfig::default());
    let button = spawn_button(&mut app, ButtonState::DownloadProgress);
    app.update();

    app.world_mut().send_event(ButtonPressed { entity: button });
    app.update();

    let state = *app.world().get::<ButtonState>(button).unwrap();
    assert_eq!(state, ButtonState::DownloadProgress);
    assert!(app.world().get::<ClickSequence>(button).is_none());
}

#[test]
fn terminal_click_swaps_to_viewer_and_state_stays() {
    let mut app = test_app(GameConfig::default());
    let button = spawn_button(&mut app, ButtonState::ReadyToPlay);
    let viewer = spawn_viewer(&mut app);
    app.update();

    app.world_mut().send_event(ButtonPressed { entity: button });
    app.update();

    assert_eq!(
        *app.world().get::<ButtonState>(button).unwrap(),
        ButtonState::ReadyToPlay,
        "terminal state must not revert"
    );
    assert_eq!(
        *app.world().get::<Visibility>(button).unwrap(),
        Visibility::Hidden
    );
    assert_eq!(
        *app.world().get::<Visibility>(viewer).unwrap(),
        Visibility::Visible
    );
}

#[test]
fn full_sequence_reaches_ready_without_skipping() {
    // Tiny durations + instant simulated download so the whole sequence fits
    // in a short real-time run.
    let mut cfg = GameConfig::default();
    cfg.button.transition_duration = 0.02;
    cfg.button.pending_hold = 0.01;
    cfg.button.progress_hold = 0.01;
    cfg.download.simulate = true;
    cfg.download.sim_duration = 0.0;

    let mut app = test_app(cfg);
    app.add_plugins(DownloadPlugin);
    // MinimalPlugins has no AssetPlugin; poll_fetch needs this resource.
    app.init_resource::<Assets<Image>>();
    let button = spawn_button(&mut app, ButtonState::WaitingToDownload);
    app.update();

    app.world_mut().send_event(ButtonPressed { entity: button });

    let mut observed = vec![ButtonState::WaitingToDownload];
    for _ in 0..500 {
        app.update();
        let state = *app.world().get::<ButtonState>(button).unwrap();
        let last = *observed.last().unwrap();
        assert!(
            state >= last,
            "state went backwards: {last:?} -> {state:?}"
        );
        if state != last {
            observed.push(state);
        }
        if state == ButtonState::ReadyToPlay {
            break;
        }
        std::thread::sleep(Duration::from_millis(2));
    }

    assert_eq!(
        observed,
        vec![
            ButtonState::WaitingToDownload,
            ButtonState::DownloadPending,
            ButtonState::DownloadProgress,
            ButtonState::ReadyToPlay,
        ],
        "states must occur in the fixed order with none skipped"
    );
    assert!(
        app.world().get::<ClickSequence>(button).is_none(),
        "sequence component must be removed at completion"
    );
}
