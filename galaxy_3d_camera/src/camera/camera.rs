/// Camera — first-person pinhole camera for a GPU ray tracer.
///
/// The camera owns its Pose and the Basis derived from it. Input mutates the
/// pose; the basis is only rebuilt by `recompute_basis()`, which `tick()`
/// calls exactly once after all of a frame's events have been applied.
///
/// The host owns the Camera and drives it once per frame:
///
/// ```no_run
/// use galaxy_3d_camera::galaxy3d::camera::{Camera, CameraConfig};
/// use galaxy_3d_camera::galaxy3d::input::{InputEvent, MoveDirection};
///
/// let mut camera = Camera::new(CameraConfig::default())?;
/// camera.toggle_capture();
/// camera.tick(&[
///     InputEvent::Translate(MoveDirection::Forward),
///     InputEvent::Look { dx: 4.0, dy: -2.0 },
/// ]);
/// let uniforms = camera.uniforms();
/// # let _ = uniforms;
/// # Ok::<(), galaxy_3d_camera::galaxy3d::Error>(())
/// ```

use glam::Vec3;
use crate::error::{Error, Result};
use crate::input::{FrameInput, InputEvent, MoveDirection};
use crate::math::rotate_around;
use super::basis::{Basis, Frame};
use super::config::CameraConfig;
use super::pose::Pose;
use super::uniforms::{CameraUniforms, UniformSink};

const SOURCE: &str = "galaxy3d::Camera";

/// First-person ray tracing camera.
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
    pose: Pose,
    image_width: u32,
    image_height: u32,
    basis: Basis,
    capturing: bool,
    /// Last recompute used the fallback frame
    degenerate: bool,
}

/// Frame for `pose`, falling back when the look direction is degenerate.
fn frame_for(pose: &Pose, previous: Option<&Frame>) -> (Frame, Option<Error>) {
    match Frame::from_look(pose.look_direction, pose.up) {
        Ok(frame) => (frame, None),
        Err(err) => (Frame::fallback(pose.look_direction, previous), Some(err)),
    }
}

impl Camera {
    /// Create a camera from a validated configuration.
    ///
    /// Capture mode starts disabled.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` when `config.validate()` fails.
    pub fn new(config: CameraConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            crate::camera_error!(SOURCE, "{}", err);
            return Err(err);
        }

        let pose = Pose::from(&config);
        let image_width = config.image_width;
        let image_height = config.image_height();

        let (frame, degenerate) = frame_for(&pose, None);
        if let Some(err) = &degenerate {
            crate::camera_warn!(SOURCE, "{}, using fallback frame", err);
        }
        let basis = Basis::new(&pose, frame, image_width, image_height, config.pixel_origin);

        crate::camera_debug!(
            SOURCE,
            "Camera created: {}x{}, vertical FOV {}°, focus distance {}",
            image_width, image_height, pose.vertical_fov, pose.focus_distance
        );

        Ok(Self {
            config,
            pose,
            image_width,
            image_height,
            basis,
            capturing: false,
            degenerate: degenerate.is_some(),
        })
    }

    // ===== GETTERS =====

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Current pose, including mutations not yet folded into the basis.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Basis as of the last `recompute_basis()`.
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// True while the last recompute had to use the fallback frame.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    // ===== CAPTURE MODE =====

    /// Whether input currently drives the camera.
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn set_capture(&mut self, capturing: bool) {
        if self.capturing != capturing {
            crate::camera_info!(
                SOURCE,
                "Input capture {}",
                if capturing { "engaged" } else { "released" }
            );
        }
        self.capturing = capturing;
    }

    /// Flip capture mode (the host calls this on a click edge).
    pub fn toggle_capture(&mut self) {
        self.set_capture(!self.capturing);
    }

    // ===== POSE MUTATION (basis is NOT recomputed) =====

    /// Move the eye along a camera-relative axis.
    ///
    /// Right/left follow `u`, forward/back follow `-w`/`w` of the current
    /// basis; up/down follow the pose's up hint.
    pub fn apply_translation(&mut self, direction: MoveDirection, amount: f32) {
        let up = self.pose.up.normalize_or_zero();
        let offset = match direction {
            MoveDirection::Right => self.basis.u() * amount,
            MoveDirection::Left => -self.basis.u() * amount,
            MoveDirection::Forward => -self.basis.w() * amount,
            MoveDirection::Back => self.basis.w() * amount,
            MoveDirection::Up => up * amount,
            MoveDirection::Down => -up * amount,
        };

        let position = self.pose.position + offset;
        if position.is_finite() {
            self.pose.position = position;
        } else {
            crate::camera_warn!(SOURCE, "Ignoring translation {:?} by {}: non-finite position", direction, amount);
        }
    }

    /// Rotate the look direction: yaw around `v`, then pitch around `u` (radians).
    pub fn apply_look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        let yawed = rotate_around(self.pose.look_direction, self.basis.v(), yaw_delta);
        let look = rotate_around(yawed, self.basis.u(), pitch_delta);

        if look.is_finite() && look.length_squared() > 0.0 {
            self.pose.look_direction = look;
        } else {
            crate::camera_warn!(SOURCE, "Ignoring look ({}, {}): non-finite direction", yaw_delta, pitch_delta);
        }
    }

    /// Change the vertical FOV by `delta * zoom_sensitivity` degrees.
    ///
    /// The result is clamped to `[min_fov, max_fov]`.
    pub fn apply_zoom(&mut self, delta: f32) {
        let fov = self.pose.vertical_fov + delta * self.config.zoom_sensitivity;
        if fov.is_nan() {
            return;
        }

        let clamped = fov.clamp(self.config.min_fov, self.config.max_fov);
        if clamped != fov {
            crate::camera_debug!(SOURCE, "Vertical FOV {}° clamped to {}°", fov, clamped);
        }
        self.pose.vertical_fov = clamped;
    }

    // ===== BASIS =====

    /// Rebuild the basis from the current pose.
    ///
    /// A look direction parallel to `up` does not produce NaN: the previous
    /// frame's right vector is reused (see `Frame::fallback`).
    pub fn recompute_basis(&mut self) {
        let (frame, degenerate) = frame_for(&self.pose, Some(&self.basis.frame));

        match &degenerate {
            Some(err) if !self.degenerate => {
                crate::camera_warn!(SOURCE, "{}, using fallback frame", err);
            }
            None if self.degenerate => {
                crate::camera_debug!(SOURCE, "Basis no longer degenerate");
            }
            _ => {}
        }
        self.degenerate = degenerate.is_some();

        self.basis = Basis::new(
            &self.pose,
            frame,
            self.image_width,
            self.image_height,
            self.config.pixel_origin,
        );
    }

    // ===== FRAME DRIVER ENTRY POINTS =====

    /// Apply one frame of input, in arrival order, then recompute once.
    ///
    /// No-op unless capture mode is engaged.
    pub fn tick(&mut self, events: &[InputEvent]) {
        if !self.capturing {
            return;
        }

        for event in events {
            match *event {
                InputEvent::Translate(direction) => {
                    self.apply_translation(direction, self.config.speed);
                }
                InputEvent::Look { dx, dy } => {
                    let sensitivity = self.config.look_sensitivity;
                    self.apply_look(dx * -sensitivity, dy * -sensitivity);
                }
                InputEvent::Zoom(delta) => {
                    self.apply_zoom(delta);
                }
            }
        }

        self.recompute_basis();

        crate::camera_trace!(
            SOURCE,
            "tick: {} events, eye {}, look {}",
            events.len(), self.pose.position, self.pose.look_direction
        );
    }

    /// Apply a pending capture toggle, then `tick` with the frame's events.
    pub fn process_frame(&mut self, frame: &FrameInput) {
        if frame.toggle_capture {
            self.toggle_capture();
        }
        self.tick(&frame.events);
    }

    // ===== OUTPUT =====

    /// GPU uniform block for the current basis.
    pub fn uniforms(&self) -> CameraUniforms {
        CameraUniforms::new(&self.basis, self.image_width, self.image_height, self.pose.defocus_angle)
    }

    /// Publish the current basis as named uniforms.
    pub fn upload(&self, sink: &mut dyn UniformSink) {
        self.uniforms().upload(sink);
    }

    /// Eye position of the current basis.
    pub fn eye_position(&self) -> Vec3 {
        self.basis.eye_position
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
