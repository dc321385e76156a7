use std::fs;
use std::io::Write;

use play_button::GameConfig;

#[test]
fn defaults_are_sane() {
    let cfg = GameConfig::default();
    assert!(cfg.button.transition_duration > 0.0);
    assert!(cfg.button.min_scale <= cfg.button.max_scale);
    assert!((0.0..=1.0).contains(&cfg.button.min_opacity));
    assert!(cfg.button.pending_swap_slowdown >= 1);
    assert!(!cfg.button.pending_frames.is_empty());
    assert!(!cfg.button.progress_frames.is_empty());
    assert!(cfg.download.simulate, "default config must not touch the network");
    assert!(
        cfg.validate().is_empty(),
        "default config should produce no warnings: {:?}",
        cfg.validate()
    );
}

#[test]
fn degenerate_tunables_warn() {
    let mut cfg = GameConfig::default();
    cfg.button.min_scale = 2.0;
    cfg.button.max_scale = 1.0;
    cfg.button.pending_swap_slowdown = 0;
    cfg.button.pending_frames.clear();
    cfg.download.simulate = false;
    cfg.download.url.clear();

    let warnings = cfg.validate();
    let joined = warnings.join("\n");
    assert!(joined.contains("min_scale"), "got: {joined}");
    assert!(joined.contains("pending_swap_slowdown"), "got: {joined}");
    assert!(joined.contains("pending_frames"), "got: {joined}");
    assert!(joined.contains("download.url"), "got: {joined}");
}

#[test]
fn partial_ron_fills_remaining_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("game.ron");
    let mut f = fs::File::create(&path).expect("create ron");
    write!(
        f,
        r#"(
            window: (
                width: 640.0,
                height: 480.0,
                title: "Test",
            ),
            session: (
                auto_close_after: 0.5,
            ),
            button: (
                max_scale: 1.5,
            ),
        )"#
    )
    .expect("write ron");

    let cfg = GameConfig::load_from_file(&path).expect("load ron");
    assert_eq!(cfg.window.width, 640.0);
    assert_eq!(cfg.session.auto_close_after, 0.5);
    assert_eq!(cfg.button.max_scale, 1.5);
    // Untouched sections keep their defaults.
    let defaults = GameConfig::default();
    assert_eq!(cfg.button.transition_duration, defaults.button.transition_duration);
    assert_eq!(cfg.download, defaults.download);
}

#[test]
fn default_frame_paths_exist_on_disk() {
    let b = GameConfig::default().button;
    let mut paths = vec![b.waiting_frame.clone(), b.ready_frame.clone()];
    paths.extend(b.pending_frames.iter().cloned());
    paths.extend(b.progress_frames.iter().cloned());
    for path in paths {
        let on_disk = std::path::Path::new("assets").join(&path);
        assert!(on_disk.exists(), "default config references '{path}' but {on_disk:?} is missing");
    }
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let (cfg, err) = GameConfig::load_or_default("does/not/exist.ron");
    assert!(err.is_some());
    assert_eq!(cfg, GameConfig::default());
}
