//! Vector helpers on top of glam.
//!
//! All operations take and return `Vec3` by value; nothing mutates in place.

use glam::Vec3;

/// Sine of the smallest angle at which two vectors still span a plane.
///
/// Closer to parallel than this, the normalized cross product of two f32
/// vectors carries too much rounding error to serve as a basis axis.
pub const DEGENERATE_EPSILON: f32 = 1.0e-4;

/// Rotate `vect` around `axis` by `angle` radians (Rodrigues' rotation formula).
///
/// `axis` does not need to be normalized. A zero-length axis leaves `vect`
/// unchanged.
///
/// ```
/// use galaxy_3d_camera::galaxy3d::math::rotate_around;
/// use galaxy_3d_camera::glam::Vec3;
///
/// let r = rotate_around(Vec3::X, Vec3::Z, std::f32::consts::FRAC_PI_2);
/// assert!((r - Vec3::Y).length() < 1e-6);
/// ```
pub fn rotate_around(vect: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let Some(k) = axis.try_normalize() else {
        return vect;
    };
    let (sin_a, cos_a) = angle.sin_cos();

    vect * cos_a + k.cross(vect) * sin_a + k * (k.dot(vect) * (1.0 - cos_a))
}

/// True when `a` and `b` span no usable plane: one of them is zero, or the
/// angle between them (or its supplement) has a sine below
/// `DEGENERATE_EPSILON`.
pub fn is_parallel(a: Vec3, b: Vec3) -> bool {
    let scale = a.length() * b.length();
    if scale == 0.0 || scale.is_nan() {
        return true;
    }
    a.cross(b).length() < DEGENERATE_EPSILON * scale
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
