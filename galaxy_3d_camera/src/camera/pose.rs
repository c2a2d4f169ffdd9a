/// Pose — the mutable camera state driven by input.

use glam::Vec3;
use super::config::CameraConfig;

/// Eye position, orientation hints and lens parameters.
///
/// `look_direction` is not kept normalized; basis recomputation normalizes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub look_direction: Vec3,
    pub up: Vec3,
    /// Degrees
    pub vertical_fov: f32,
    /// Degrees, 0 for a pinhole
    pub defocus_angle: f32,
    pub focus_distance: f32,
}

impl Pose {
    /// Point one look direction ahead of the eye.
    pub fn look_at(&self) -> Vec3 {
        self.position + self.look_direction
    }
}

impl From<&CameraConfig> for Pose {
    fn from(config: &CameraConfig) -> Self {
        Self {
            position: config.position,
            look_direction: config.look_direction,
            up: config.up,
            vertical_fov: config.vertical_fov,
            defocus_angle: config.defocus_angle,
            focus_distance: config.focus_distance,
        }
    }
}
