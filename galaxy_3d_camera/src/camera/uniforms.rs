/// Uniforms — the per-frame values handed to the ray generation shader.
///
/// Two upload paths:
/// - `CameraUniforms` is a `#[repr(C)]` Pod block, vec4 aligned, for
///   uniform buffer writes (`bytemuck::bytes_of`)
/// - `UniformSink` receives the same values one by one, by name, for hosts
///   that set shader uniforms individually

use super::basis::Basis;

/// Uniform name of the first sample point
pub const UNIFORM_PIXEL_ORIGIN: &str = "pixel_origin";
/// Uniform name of the horizontal pixel step
pub const UNIFORM_PIXEL_DELTA_U: &str = "pixel_delta_u";
/// Uniform name of the vertical pixel step
pub const UNIFORM_PIXEL_DELTA_V: &str = "pixel_delta_v";
/// Uniform name of the eye position
pub const UNIFORM_EYE_POSITION: &str = "eye_position";
/// Uniform name of the defocus disk horizontal radius vector
pub const UNIFORM_DEFOCUS_DISK_U: &str = "defocus_disk_u";
/// Uniform name of the defocus disk vertical radius vector
pub const UNIFORM_DEFOCUS_DISK_V: &str = "defocus_disk_v";
/// Uniform name of the render target size (width, height)
pub const UNIFORM_RESOLUTION: &str = "resolution";
/// Uniform name of the defocus angle (degrees)
pub const UNIFORM_DEFOCUS_ANGLE: &str = "defocus_angle";

/// Receiver for named uniform values (implemented by the host renderer).
pub trait UniformSink {
    fn set_vec3(&mut self, name: &str, value: [f32; 3]);

    fn set_uvec2(&mut self, name: &str, value: [u32; 2]);

    fn set_float(&mut self, name: &str, value: f32);
}

/// GPU layout of the camera uniforms (std140 compatible).
///
/// Vectors are padded to vec4; the `w` component is zero.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub pixel_origin: [f32; 4],
    pub pixel_delta_u: [f32; 4],
    pub pixel_delta_v: [f32; 4],
    pub eye_position: [f32; 4],
    pub defocus_disk_u: [f32; 4],
    pub defocus_disk_v: [f32; 4],
    pub resolution: [u32; 2],
    pub defocus_angle: f32,
    pub _padding: f32,
}

impl CameraUniforms {
    pub fn new(basis: &Basis, image_width: u32, image_height: u32, defocus_angle: f32) -> Self {
        Self {
            pixel_origin: basis.pixel_origin.extend(0.0).to_array(),
            pixel_delta_u: basis.pixel_delta_u.extend(0.0).to_array(),
            pixel_delta_v: basis.pixel_delta_v.extend(0.0).to_array(),
            eye_position: basis.eye_position.extend(0.0).to_array(),
            defocus_disk_u: basis.defocus_disk_u.extend(0.0).to_array(),
            defocus_disk_v: basis.defocus_disk_v.extend(0.0).to_array(),
            resolution: [image_width, image_height],
            defocus_angle,
            _padding: 0.0,
        }
    }

    /// Raw bytes for a uniform buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Send every value to `sink` under its uniform name.
    pub fn upload(&self, sink: &mut dyn UniformSink) {
        fn xyz(v: &[f32; 4]) -> [f32; 3] {
            [v[0], v[1], v[2]]
        }

        sink.set_vec3(UNIFORM_PIXEL_ORIGIN, xyz(&self.pixel_origin));
        sink.set_vec3(UNIFORM_PIXEL_DELTA_U, xyz(&self.pixel_delta_u));
        sink.set_vec3(UNIFORM_PIXEL_DELTA_V, xyz(&self.pixel_delta_v));
        sink.set_vec3(UNIFORM_EYE_POSITION, xyz(&self.eye_position));
        sink.set_vec3(UNIFORM_DEFOCUS_DISK_U, xyz(&self.defocus_disk_u));
        sink.set_vec3(UNIFORM_DEFOCUS_DISK_V, xyz(&self.defocus_disk_v));
        sink.set_uvec2(UNIFORM_RESOLUTION, self.resolution);
        sink.set_float(UNIFORM_DEFOCUS_ANGLE, self.defocus_angle);
    }
}

#[cfg(test)]
#[path = "uniforms_tests.rs"]
mod tests;
