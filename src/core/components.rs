use bevy::prelude::*;

/// Marker component identifying the clickable button root entity
/// (owns the tweened `Transform` scale and the lifecycle state).
#[derive(Component)]
pub struct PlayButton;

/// Download/play lifecycle. Transitions only ever move forward:
/// WaitingToDownload -> DownloadPending -> DownloadProgress -> ReadyToPlay.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ButtonState {
    WaitingToDownload,
    DownloadPending,
    DownloadProgress,
    ReadyToPlay,
}

/// Tag for the background sprite child (solid plate, cross-faded into the
/// ready color during the final transition).
#[derive(Component)]
pub struct ButtonBackground;

/// Tag for the foreground sprite child (state icon; fades and swaps frames).
#[derive(Component)]
pub struct ButtonForeground;

/// Hidden sprite shown in place of the button after the terminal-state click;
/// displays the downloaded image.
#[derive(Component)]
pub struct ImageViewer;
