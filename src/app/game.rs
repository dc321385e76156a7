// This file is part of Play Button.
// Copyright (C) 2025 Play Button contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::{AnimationSet, InputSet};
use crate::debug::DebugPlugin;
use crate::gameplay::button::ButtonPlugin;
use crate::gameplay::download::DownloadPlugin;
use crate::interaction::input::PointerDispatchPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::rendering::button_scene::ButtonScenePlugin;
use crate::rendering::camera::CameraPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (InputSet, AnimationSet.after(InputSet)))
            .add_plugins((
                CameraPlugin,
                ButtonScenePlugin,
                PointerDispatchPlugin,
                ButtonPlugin,
                DownloadPlugin,
                AutoClosePlugin,
                DebugPlugin,
            ))
            .add_systems(Startup, log_config_warnings);
    }
}

fn log_config_warnings(cfg: Res<GameConfig>) {
    for w in cfg.validate() {
        warn!("config: {w}");
    }
}
