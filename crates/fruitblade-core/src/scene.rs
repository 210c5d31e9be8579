//! Static scene description.
//!
//! Everything the host has to build once before the first frame: background,
//! camera, light, floor and the meshes it instantiates for swords and fruit.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::constants::*;
use crate::enums::FruitShape;
use crate::types::Rgb;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub background: Rgb,
    pub camera: CameraDescription,
    pub light: HemisphereLight,
    pub floor: FloorDescription,
    pub sword: SwordMesh,
    pub fruit: FruitMesh,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HemisphereLight {
    pub sky: Rgb,
    pub ground: Rgb,
}

/// Horizontal square plane at y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorDescription {
    pub size: f32,
    pub color: Rgb,
}

/// Box mesh hanging from each controller; its center sits at the hit point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwordMesh {
    pub size: Vec3,
    pub offset: Vec3,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitMesh {
    pub shapes: Vec<FruitShape>,
    pub radius: f32,
    pub sphere_segments: u32,
    /// Model file for `FruitShape::Model`, if any.
    pub model_path: Option<String>,
}

impl SceneDescription {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            background: config.scene.background,
            camera: CameraDescription {
                fov_degrees: CAMERA_FOV_DEGREES,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                position: Vec3::from_array(CAMERA_POSITION),
            },
            light: HemisphereLight {
                sky: Rgb(LIGHT_SKY_COLOR),
                ground: Rgb(LIGHT_GROUND_COLOR),
            },
            floor: FloorDescription {
                size: FLOOR_SIZE,
                color: config.scene.floor_color,
            },
            sword: SwordMesh {
                size: config.sword.size,
                offset: config.sword.offset,
                color: config.sword.color,
            },
            fruit: FruitMesh {
                shapes: config.spawn.shapes.clone(),
                radius: config.spawn.radius,
                sphere_segments: FRUIT_SPHERE_SEGMENTS,
                model_path: config.spawn.model_path.clone(),
            },
        }
    }
}
