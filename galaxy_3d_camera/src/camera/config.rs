/// Camera configuration — construction parameters and control tuning.
///
/// Defaults reproduce the reference viewer: a 1920 pixel wide 16:9 image,
/// eye at the origin looking down -Z with +Y up, 90° vertical FOV,
/// pinhole lens focused at 10 units.

use glam::Vec3;
use crate::error::{Error, Result};

/// Where the first sample point sits inside the top-left pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelOrigin {
    /// Center of the pixel (half-pixel offset from the viewport corner)
    #[default]
    Center,
    /// Top-left corner of the pixel, i.e. the viewport corner itself
    Corner,
}

/// Camera configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Image width / image height, > 0
    pub aspect_ratio: f32,
    /// Image width in pixels, > 0
    pub image_width: u32,
    /// Initial eye position
    pub position: Vec3,
    /// Initial forward direction (non-zero, need not be normalized)
    pub look_direction: Vec3,
    /// Up hint used to derive the right vector (non-zero)
    pub up: Vec3,
    /// Vertical field of view in degrees, in (0, 180)
    pub vertical_fov: f32,
    /// Thin lens aperture angle in degrees, 0 for a pinhole
    pub defocus_angle: f32,
    /// Eye to image plane distance, > 0
    pub focus_distance: f32,
    /// Translation per movement event (world units)
    pub speed: f32,
    /// Radians of rotation per unit of pointer motion
    pub look_sensitivity: f32,
    /// Degrees of FOV per unit of scroll delta
    pub zoom_sensitivity: f32,
    /// Lower FOV clamp in degrees
    pub min_fov: f32,
    /// Upper FOV clamp in degrees
    pub max_fov: f32,
    /// Sample point placement inside a pixel
    pub pixel_origin: PixelOrigin,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            image_width: 1920,
            position: Vec3::ZERO,
            look_direction: Vec3::NEG_Z,
            up: Vec3::Y,
            vertical_fov: 90.0,
            defocus_angle: 0.0,
            focus_distance: 10.0,
            speed: 0.05,
            look_sensitivity: 0.01,
            zoom_sensitivity: 0.1,
            min_fov: 1.0,
            max_fov: 179.0,
            pixel_origin: PixelOrigin::Center,
        }
    }
}

impl CameraConfig {
    /// Config with the given image shape and initial pose, defaults elsewhere.
    pub fn new(
        aspect_ratio: f32,
        image_width: u32,
        position: Vec3,
        look_direction: Vec3,
        up: Vec3,
    ) -> Self {
        Self {
            aspect_ratio,
            image_width,
            position,
            look_direction,
            up,
            ..Default::default()
        }
    }

    /// Image height derived from width and aspect ratio, never below 1.
    ///
    /// Only meaningful for a validated config.
    pub fn image_height(&self) -> u32 {
        let height = (self.image_width as f32 / self.aspect_ratio).floor();
        (height as u32).max(1)
    }

    /// Reject configurations that cannot produce a usable basis.
    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: String) -> Result<()> {
            Err(Error::InvalidConfiguration(msg))
        }

        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return invalid(format!("aspect_ratio must be > 0 (got {})", self.aspect_ratio));
        }
        if self.image_width == 0 {
            return invalid("image_width must be > 0".to_string());
        }
        if !self.min_fov.is_finite() || !self.max_fov.is_finite()
            || self.min_fov <= 0.0 || self.max_fov >= 180.0 || self.min_fov > self.max_fov
        {
            return invalid(format!(
                "FOV limits must satisfy 0 < min_fov <= max_fov < 180 (got {}..{})",
                self.min_fov, self.max_fov
            ));
        }
        if !self.vertical_fov.is_finite() || self.vertical_fov <= 0.0 || self.vertical_fov >= 180.0 {
            return invalid(format!(
                "vertical_fov must be in (0, 180) degrees (got {})",
                self.vertical_fov
            ));
        }
        if !self.focus_distance.is_finite() || self.focus_distance <= 0.0 {
            return invalid(format!("focus_distance must be > 0 (got {})", self.focus_distance));
        }
        if !self.defocus_angle.is_finite() || self.defocus_angle < 0.0 || self.defocus_angle >= 180.0 {
            return invalid(format!(
                "defocus_angle must be in [0, 180) degrees (got {})",
                self.defocus_angle
            ));
        }
        if !self.position.is_finite() {
            return invalid(format!("position must be finite (got {})", self.position));
        }
        if !self.look_direction.is_finite() || self.look_direction.length_squared() == 0.0 {
            return invalid(format!(
                "look_direction must be a non-zero finite vector (got {})",
                self.look_direction
            ));
        }
        if !self.up.is_finite() || self.up.length_squared() == 0.0 {
            return invalid(format!("up must be a non-zero finite vector (got {})", self.up));
        }
        if !self.speed.is_finite() || !self.look_sensitivity.is_finite() || !self.zoom_sensitivity.is_finite() {
            return invalid("control tuning (speed, sensitivities) must be finite".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
