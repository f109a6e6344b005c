//! Central system ordering labels to make the tick sequence explicit.
//! Stages (high-level):
//! 1. Input (PreUpdate, input map evaluation; handled by `InputActionsPlugin`)
//! 2. Intent (PreUpdate, latch actions before this frame's fixed ticks)
//! 3. Simulation (FixedUpdate, walking -> jumping -> gravity -> background scroll)
//! 4. Presentation (Update, copy simulation state into transforms / sprites)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct IntentSet; // read actions into latched intent

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SimulationSet; // fixed-rate state update

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentationSet; // sync visuals from simulation state
