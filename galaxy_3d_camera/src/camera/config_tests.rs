use glam::Vec3;
use crate::error::Error;
use super::*;

fn assert_invalid(config: CameraConfig, needle: &str) {
    match config.validate() {
        Err(Error::InvalidConfiguration(msg)) => {
            assert!(msg.contains(needle), "message {:?} does not mention {:?}", msg, needle);
        }
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_default_config_is_valid() {
    let config = CameraConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.image_width, 1920);
    assert_eq!(config.vertical_fov, 90.0);
    assert_eq!(config.focus_distance, 10.0);
    assert_eq!(config.defocus_angle, 0.0);
    assert_eq!(config.pixel_origin, PixelOrigin::Center);
}

#[test]
fn test_new_keeps_tuning_defaults() {
    let config = CameraConfig::new(2.0, 800, Vec3::ONE, Vec3::X, Vec3::Z);
    assert_eq!(config.aspect_ratio, 2.0);
    assert_eq!(config.image_width, 800);
    assert_eq!(config.position, Vec3::ONE);
    assert_eq!(config.look_direction, Vec3::X);
    assert_eq!(config.up, Vec3::Z);
    assert_eq!(config.speed, CameraConfig::default().speed);
}

// ============================================================================
// image_height
// ============================================================================

#[test]
fn test_image_height_full_hd() {
    let config = CameraConfig::default();
    assert_eq!(config.image_height(), 1080);
}

#[test]
fn test_image_height_floors() {
    let mut config = CameraConfig::default();
    config.image_width = 1001;
    config.aspect_ratio = 2.0;
    assert_eq!(config.image_height(), 500);

    config.image_width = 800;
    config.aspect_ratio = 4.0 / 3.0;
    assert_eq!(config.image_height(), 600);
}

#[test]
fn test_image_height_clamps_to_one() {
    let mut config = CameraConfig::default();
    config.image_width = 100;
    config.aspect_ratio = 200.0;
    assert_eq!(config.image_height(), 1);

    config.image_width = 1;
    config.aspect_ratio = 1.5;
    assert_eq!(config.image_height(), 1);
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_rejects_non_positive_aspect_ratio() {
    let mut config = CameraConfig::default();
    config.aspect_ratio = 0.0;
    assert_invalid(config.clone(), "aspect_ratio");

    config.aspect_ratio = -1.0;
    assert_invalid(config.clone(), "aspect_ratio");

    config.aspect_ratio = f32::NAN;
    assert_invalid(config, "aspect_ratio");
}

#[test]
fn test_rejects_zero_image_width() {
    let mut config = CameraConfig::default();
    config.image_width = 0;
    assert_invalid(config, "image_width");
}

#[test]
fn test_rejects_out_of_range_fov() {
    let mut config = CameraConfig::default();
    config.vertical_fov = 0.0;
    assert_invalid(config.clone(), "vertical_fov");

    config.vertical_fov = -10.0;
    assert_invalid(config.clone(), "vertical_fov");

    config.vertical_fov = 180.0;
    assert_invalid(config, "vertical_fov");
}

#[test]
fn test_rejects_bad_fov_limits() {
    let mut config = CameraConfig::default();
    config.min_fov = 0.0;
    assert_invalid(config.clone(), "FOV limits");

    config.min_fov = 100.0;
    config.max_fov = 50.0;
    assert_invalid(config, "FOV limits");
}

#[test]
fn test_rejects_bad_lens() {
    let mut config = CameraConfig::default();
    config.focus_distance = 0.0;
    assert_invalid(config.clone(), "focus_distance");

    config.focus_distance = 10.0;
    config.defocus_angle = -1.0;
    assert_invalid(config, "defocus_angle");
}

#[test]
fn test_rejects_zero_vectors() {
    let mut config = CameraConfig::default();
    config.look_direction = Vec3::ZERO;
    assert_invalid(config.clone(), "look_direction");

    config.look_direction = Vec3::NEG_Z;
    config.up = Vec3::ZERO;
    assert_invalid(config.clone(), "up");

    config.up = Vec3::Y;
    config.position = Vec3::new(f32::INFINITY, 0.0, 0.0);
    assert_invalid(config, "position");
}

#[test]
fn test_accepts_parallel_look_and_up() {
    // Degenerate orientation is recovered at basis time, not rejected
    let mut config = CameraConfig::default();
    config.look_direction = Vec3::Y;
    assert!(config.validate().is_ok());
}
