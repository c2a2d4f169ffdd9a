//! Camera module — pose, derived ray generation basis, and GPU uniforms.
//!
//! The engine does NOT store or manage cameras: the host owns a `Camera`
//! and drives it once per frame.

mod basis;
mod camera;
mod config;
mod pose;
mod shared_basis;
mod uniforms;

pub use basis::{Basis, Frame};
pub use camera::Camera;
pub use config::{CameraConfig, PixelOrigin};
pub use pose::Pose;
pub use shared_basis::SharedBasis;
pub use uniforms::{
    CameraUniforms, UniformSink,
    UNIFORM_PIXEL_ORIGIN, UNIFORM_PIXEL_DELTA_U, UNIFORM_PIXEL_DELTA_V, UNIFORM_EYE_POSITION,
    UNIFORM_DEFOCUS_DISK_U, UNIFORM_DEFOCUS_DISK_V, UNIFORM_RESOLUTION, UNIFORM_DEFOCUS_ANGLE,
};
