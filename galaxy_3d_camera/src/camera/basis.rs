/// Basis — per-frame ray generation geometry derived from a Pose.
///
/// Conventions (right-handed):
/// - `w` points backward, away from the view direction
/// - `u` points right, `v` points up
/// - The viewport is walked from its top-left corner: `pixel_delta_u` steps
///   right along a row, `pixel_delta_v` steps down to the next row
///
/// The primary ray for pixel (i, j) starts at the eye (or a point on the
/// defocus disk) and passes through
/// `pixel_origin + i * pixel_delta_u + j * pixel_delta_v`.

use glam::Vec3;
use crate::error::{Error, Result};
use crate::math::is_parallel;
use super::config::PixelOrigin;
use super::pose::Pose;

/// Orthonormal camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Right
    pub u: Vec3,
    /// Up
    pub v: Vec3,
    /// Backward
    pub w: Vec3,
}

impl Frame {
    /// Derive the frame from a look direction and an up hint.
    ///
    /// Fails with `DegenerateBasis` when the look direction has no length or
    /// is parallel to `up`, since `cross(up, w)` then has no direction.
    pub fn from_look(look_direction: Vec3, up: Vec3) -> Result<Self> {
        let w = (-look_direction).try_normalize().ok_or_else(|| {
            Error::DegenerateBasis(format!("look direction {} cannot be normalized", look_direction))
        })?;

        if is_parallel(up, w) {
            return Err(Error::DegenerateBasis(format!(
                "look direction {} is parallel to up {}",
                look_direction, up
            )));
        }

        // Near the degenerate limit the cross product is short and its
        // rounding error tilts u out of the plane orthogonal to w.
        let u = up.cross(w);
        let u = (u - w * u.dot(w)).normalize();
        let v = w.cross(u).normalize();
        Ok(Self { u, v, w })
    }

    /// Frame used when `from_look` fails. Never produces NaN.
    ///
    /// `w` comes from the look direction when it can be normalized, else from
    /// the previous frame. The right vector is the previous `u` made
    /// orthogonal to `w`, which keeps the horizon continuous when pitching
    /// over the pole; without a usable previous frame any orthogonal vector
    /// is taken.
    pub fn fallback(look_direction: Vec3, previous: Option<&Frame>) -> Self {
        let w = (-look_direction)
            .try_normalize()
            .or_else(|| previous.map(|frame| frame.w))
            .unwrap_or(Vec3::Z);

        let u = previous
            .and_then(|frame| (frame.u - w * frame.u.dot(w)).try_normalize())
            .unwrap_or_else(|| w.any_orthonormal_vector());
        let v = w.cross(u).normalize();

        Self { u, v, w }
    }
}

/// Render basis consumed by the ray generation stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub frame: Frame,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// World-space step between horizontally adjacent samples
    pub pixel_delta_u: Vec3,
    /// World-space step between vertically adjacent samples (downward)
    pub pixel_delta_v: Vec3,
    /// First sample point (top-left pixel)
    pub pixel_origin: Vec3,
    pub eye_position: Vec3,
    /// Defocus disk horizontal radius vector (zero for a pinhole)
    pub defocus_disk_u: Vec3,
    /// Defocus disk vertical radius vector (zero for a pinhole)
    pub defocus_disk_v: Vec3,
}

impl Basis {
    /// Compute the viewport geometry for `pose` seen through `frame`.
    pub fn new(
        pose: &Pose,
        frame: Frame,
        image_width: u32,
        image_height: u32,
        pixel_origin: PixelOrigin,
    ) -> Self {
        let width = image_width as f32;
        let height = image_height as f32;

        let h = (pose.vertical_fov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h * pose.focus_distance;
        let viewport_width = viewport_height * (width / height);

        // Edge vectors: across the top, and down the left side
        let viewport_u = frame.u * viewport_width;
        let viewport_v = -frame.v * viewport_height;

        let pixel_delta_u = viewport_u / width;
        let pixel_delta_v = viewport_v / height;

        let viewport_upper_left = pose.position
            - frame.w * pose.focus_distance
            - viewport_u / 2.0
            - viewport_v / 2.0;

        let pixel_origin = match pixel_origin {
            PixelOrigin::Center => viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v),
            PixelOrigin::Corner => viewport_upper_left,
        };

        let defocus_radius = pose.focus_distance * (pose.defocus_angle.to_radians() / 2.0).tan();

        Self {
            frame,
            viewport_width,
            viewport_height,
            pixel_delta_u,
            pixel_delta_v,
            pixel_origin,
            eye_position: pose.position,
            defocus_disk_u: frame.u * defocus_radius,
            defocus_disk_v: frame.v * defocus_radius,
        }
    }

    /// Right
    pub fn u(&self) -> Vec3 {
        self.frame.u
    }

    /// Up
    pub fn v(&self) -> Vec3 {
        self.frame.v
    }

    /// Backward
    pub fn w(&self) -> Vec3 {
        self.frame.w
    }

    /// Sample point of pixel (i, j), counted from the top-left.
    pub fn pixel_center(&self, i: u32, j: u32) -> Vec3 {
        self.pixel_origin + i as f32 * self.pixel_delta_u + j as f32 * self.pixel_delta_v
    }

    /// True when every published field is finite.
    pub fn is_finite(&self) -> bool {
        self.frame.u.is_finite()
            && self.frame.v.is_finite()
            && self.frame.w.is_finite()
            && self.viewport_width.is_finite()
            && self.viewport_height.is_finite()
            && self.pixel_delta_u.is_finite()
            && self.pixel_delta_v.is_finite()
            && self.pixel_origin.is_finite()
            && self.eye_position.is_finite()
            && self.defocus_disk_u.is_finite()
            && self.defocus_disk_v.is_finite()
    }
}

#[cfg(test)]
#[path = "basis_tests.rs"]
mod tests;
