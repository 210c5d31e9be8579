//! ECS systems that operate on the game world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components or is passed in.

pub mod cleanup;
pub mod movement;
pub mod slicing;
pub mod snapshot;
pub mod spawner;
pub mod sword;
