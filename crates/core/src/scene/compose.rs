//! Derives the renderable scene graph from a configuration.

use std::f64::consts::PI;

use crate::catalog::CatalogEntry;
use crate::config::Configuration;
use crate::error::{CoreError, KeyDomain};
use crate::scene::graph::{
    Camera, Light, Material, Primitive, SceneGraph, SceneNode, Transform, Vec3,
};

/// Metalness applied to the painted shell, constant across models and colors.
const SHELL_METALNESS: f64 = 0.8;
/// Roughness applied to the painted shell.
const SHELL_ROUGHNESS: f64 = 0.2;

/// Plain matte parameters for the unpainted trim parts.
const TRIM_METALNESS: f64 = 0.0;
const TRIM_ROUGHNESS: f64 = 1.0;

/// Dark trim color for the lower hull.
const HULL_COLOR: &str = "#111111";
/// Dark trim color for the wheel hubs.
const HUB_COLOR: &str = "#222222";

/// Wheel hub dimensions and placement.
const HUB_RADIUS: f64 = 0.4;
const HUB_LENGTH: f64 = 0.2;
const HUB_SEGMENTS: u32 = 32;
const HUB_OFFSET_X: f64 = 1.2;
const HUB_OFFSET_Z: f64 = 0.6;

/// Ground shadow receiver.
const GROUND_SIZE: f64 = 12.0;
const GROUND_Y: f64 = -0.5;
const GROUND_SHADOW_OPACITY: f64 = 0.4;

/// Lighting rig.
const AMBIENT_INTENSITY: f64 = 0.6;
const DIRECTIONAL_INTENSITY: f64 = 1.2;

/// Camera defaults. The polar cap (π/2.2, ≈82°) stops the orbit just short
/// of the horizon so the ground plane is never seen from below.
const CAMERA_POSITION: Vec3 = Vec3 {
    x: 5.0,
    y: 3.0,
    z: 5.0,
};
const CAMERA_MAX_POLAR_RAD: f64 = PI / 2.2;

/// Build the scene graph for a configuration.
///
/// Pure and deterministic: identical inputs yield a structurally identical
/// graph (same node count, order, and parameter values), which the renderer
/// relies on for stable incremental redraws.
///
/// The entry must be the catalog row for `config.model`; a mismatch is a
/// caller error and fails with `InvalidKey`.
pub fn compose(config: &Configuration, entry: &CatalogEntry) -> Result<SceneGraph, CoreError> {
    if entry.model != config.model {
        return Err(CoreError::invalid_key(KeyDomain::Model, entry.model.as_key()));
    }

    let body = &entry.body;

    let shell = SceneNode {
        name: "body-shell",
        primitive: Primitive::Cuboid {
            width: body.shell_length,
            height: body.shell_height,
            depth: body.shell_width,
        },
        transform: Transform::at(Vec3::new(0.0, 0.5, 0.0)),
        material: Material::Standard {
            color: config.color_value.clone(),
            metalness: SHELL_METALNESS,
            roughness: SHELL_ROUGHNESS,
        },
        cast_shadow: true,
        receive_shadow: false,
    };

    // Lower hull sits inside the shell footprint, slightly shrunk.
    let hull = SceneNode {
        name: "lower-hull",
        primitive: Primitive::Cuboid {
            width: body.shell_length - 0.5,
            height: 0.6,
            depth: body.shell_width - 0.3,
        },
        transform: Transform::at(Vec3::ZERO),
        material: Material::Standard {
            color: HULL_COLOR.to_string(),
            metalness: TRIM_METALNESS,
            roughness: TRIM_ROUGHNESS,
        },
        cast_shadow: false,
        receive_shadow: false,
    };

    let hub = |name: &'static str, offset_x: f64| SceneNode {
        name,
        primitive: Primitive::Cylinder {
            radius: HUB_RADIUS,
            length: HUB_LENGTH,
            segments: HUB_SEGMENTS,
        },
        // Cylinders extrude along Y; roll them onto their side.
        transform: Transform::at(Vec3::new(offset_x, 0.0, HUB_OFFSET_Z))
            .rotated(Vec3::new(0.0, 0.0, PI / 2.0)),
        material: Material::Standard {
            color: HUB_COLOR.to_string(),
            metalness: TRIM_METALNESS,
            roughness: TRIM_ROUGHNESS,
        },
        cast_shadow: false,
        receive_shadow: false,
    };

    let ground = SceneNode {
        name: "ground",
        primitive: Primitive::Plane {
            width: GROUND_SIZE,
            depth: GROUND_SIZE,
        },
        transform: Transform::at(Vec3::new(0.0, GROUND_Y, 0.0))
            .rotated(Vec3::new(-PI / 2.0, 0.0, 0.0)),
        material: Material::Shadow {
            opacity: GROUND_SHADOW_OPACITY,
        },
        cast_shadow: false,
        receive_shadow: true,
    };

    Ok(SceneGraph {
        nodes: vec![
            shell,
            hull,
            hub("front-hub", HUB_OFFSET_X),
            hub("rear-hub", -HUB_OFFSET_X),
            ground,
        ],
        lights: vec![
            Light::Ambient {
                intensity: AMBIENT_INTENSITY,
            },
            Light::Directional {
                position: Vec3::new(10.0, 10.0, 5.0),
                intensity: DIRECTIONAL_INTENSITY,
                cast_shadow: true,
            },
        ],
        camera: Camera {
            position: CAMERA_POSITION,
            max_polar_angle_rad: CAMERA_MAX_POLAR_RAD,
            pan_enabled: false,
        },
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::catalog::{self, ModelKind};

    fn sports_entry() -> &'static CatalogEntry {
        catalog::entry(ModelKind::Sports)
    }

    #[test]
    fn compose_is_deterministic() {
        let config = Configuration::default_build();
        let a = compose(&config, sports_entry()).unwrap();
        let b = compose(&config, sports_entry()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_topology_in_fixed_order() {
        let config = Configuration::default_build();
        let graph = compose(&config, sports_entry()).unwrap();
        let names: Vec<&str> = graph.nodes.iter().map(|n| n.name).collect();
        assert_eq!(
            names,
            vec!["body-shell", "lower-hull", "front-hub", "rear-hub", "ground"]
        );
        assert_eq!(graph.lights.len(), 2);
    }

    #[test]
    fn shell_carries_the_configured_paint() {
        let config = Configuration::default_build().select_color("#32D74B").unwrap();
        let graph = compose(&config, sports_entry()).unwrap();
        assert_matches!(
            &graph.nodes[0].material,
            Material::Standard { color, metalness, roughness } => {
                assert_eq!(color, "#32D74B");
                assert_eq!(*metalness, 0.8);
                assert_eq!(*roughness, 0.2);
            }
        );
    }

    #[test]
    fn shell_dimensions_come_from_the_catalog_entry() {
        let config = Configuration::default_build().select_model("muscle").unwrap();
        let entry = catalog::entry(ModelKind::Muscle);
        let graph = compose(&config, entry).unwrap();
        assert_matches!(
            graph.nodes[0].primitive,
            Primitive::Cuboid { width, height, depth } => {
                assert_eq!(width, entry.body.shell_length);
                assert_eq!(height, entry.body.shell_height);
                assert_eq!(depth, entry.body.shell_width);
            }
        );
    }

    #[test]
    fn hubs_sit_at_mirrored_offsets() {
        let config = Configuration::default_build();
        let graph = compose(&config, sports_entry()).unwrap();
        let front = &graph.nodes[2];
        let rear = &graph.nodes[3];
        assert_eq!(front.transform.position.x, 1.2);
        assert_eq!(rear.transform.position.x, -1.2);
        assert_eq!(front.transform.position.z, rear.transform.position.z);
    }

    #[test]
    fn ground_receives_shadows_and_nothing_else_does() {
        let config = Configuration::default_build();
        let graph = compose(&config, sports_entry()).unwrap();
        for node in &graph.nodes {
            assert_eq!(node.receive_shadow, node.name == "ground");
        }
    }

    #[test]
    fn camera_polar_cap_stays_above_the_horizon() {
        let config = Configuration::default_build();
        let graph = compose(&config, sports_entry()).unwrap();
        assert!(graph.camera.max_polar_angle_rad < std::f64::consts::FRAC_PI_2);
        assert!(!graph.camera.pan_enabled);
    }

    #[test]
    fn mismatched_entry_is_a_caller_error() {
        let config = Configuration::default_build(); // Sports
        let wrong = catalog::entry(ModelKind::Supercar);
        assert_matches!(compose(&config, wrong), Err(CoreError::InvalidKey { .. }));
    }
}
