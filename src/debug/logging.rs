#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use super::DebugState;
#[cfg(feature = "debug")]
use crate::core::components::{ButtonState, PlayButton};
#[cfg(feature = "debug")]
use crate::gameplay::download::DownloadState;

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    download: Option<Res<DownloadState>>,
    q: Query<&ButtonState, With<PlayButton>>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        let progress = download.map(|d| d.progress).unwrap_or(0.0);
        for bs in q.iter() {
            info!(
                "BTN frame={} t={:.3}s state={:?} download={:.0}%",
                state.frame_counter,
                time.elapsed_secs(),
                bs,
                progress * 100.0
            );
        }
    }
}
