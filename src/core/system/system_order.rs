//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level):
//! 1. Input (pointer release -> click events)
//! 2. Animation (click sequences, viewer tween, download polling)
//! 3. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet; // pointer dispatch before any state advances

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct AnimationSet; // per-frame tweens applied after input
