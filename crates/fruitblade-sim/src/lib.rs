//! Simulation engine for FRUITBLADE.
//!
//! Owns the hecs ECS world, runs systems once per display frame,
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod hud;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use fruitblade_core as core;

#[cfg(test)]
mod tests;
