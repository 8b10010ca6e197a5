use serde::{Deserialize, Serialize};

/// A point or direction in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Position plus Euler XYZ rotation in radians. No per-node scale; all
/// sizing lives in the primitive parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation_rad: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation_rad: Vec3::ZERO,
        }
    }

    pub fn rotated(mut self, rotation_rad: Vec3) -> Self {
        self.rotation_rad = rotation_rad;
        self
    }
}

/// Geometry primitives the renderer knows how to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Primitive {
    Cuboid {
        width: f64,
        height: f64,
        depth: f64,
    },
    Cylinder {
        radius: f64,
        length: f64,
        segments: u32,
    },
    Plane {
        width: f64,
        depth: f64,
    },
}

/// Surface parameterization for a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Material {
    /// Metal/rough PBR surface with a flat base color.
    Standard {
        color: String,
        metalness: f64,
        roughness: f64,
    },
    /// Shadow-only receiver surface (the ground plane).
    Shadow { opacity: f64 },
}

/// One drawable node in the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    /// Stable name for incremental redraws and test assertions.
    pub name: &'static str,
    pub primitive: Primitive,
    pub transform: Transform,
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

/// Scene lighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Light {
    Ambient {
        intensity: f64,
    },
    Directional {
        position: Vec3,
        intensity: f64,
        cast_shadow: bool,
    },
}

/// Default camera pose and the allowed orbit envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    /// Orbit polar angle cap in radians. Keeps the camera above the
    /// horizon-adjacent band so it can never look up through the ground.
    pub max_polar_angle_rad: f64,
    pub pan_enabled: bool,
}

/// The complete declarative scene handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneGraph {
    pub nodes: Vec<SceneNode>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}
