// This file is part of Play Button.
// Copyright (C) 2025 Play Button contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use clap::Parser;

use play_button::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(name = "play_button", about = "Tap-to-download play button demo")]
struct Cli {
    /// Path to the RON config file.
    #[arg(long, default_value = "assets/config/game.ron")]
    config: String,
}

fn main() {
    let cli = Cli::parse();
    // Load configuration (fall back to defaults if missing)
    let (cfg, load_err) = GameConfig::load_or_default(&cli.config);
    if let Some(err) = load_err {
        eprintln!("config: {err}; using defaults");
    }

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();
}
