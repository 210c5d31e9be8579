//! FRUITBLADE application.
//!
//! This crate wires the simulation to its surroundings: configuration files,
//! asset loading, controller input, and the per-frame loop that stands in for
//! the host engine's XR animation loop.

pub mod assets;
pub mod config_file;
pub mod control;
pub mod game_loop;
pub mod pose_source;
pub mod state;

pub use fruitblade_core as core;
