/*!
# Galaxy 3D Camera

First-person camera for the Galaxy3D GPU ray tracer.

The camera turns interactive pose state (keyboard translation, mouse-look
rotation, scroll-driven field of view) into the pinhole basis a ray generation
shader needs: the top-left sample point, the per-pixel step vectors and the eye
position.

## Architecture

- **Camera**: owns the Pose, derives the Basis, applies input once per frame
- **InputCollector**: winit adapter producing per-frame `InputEvent`s
- **CameraUniforms / UniformSink**: GPU upload of the basis
- **SharedBasis**: hand-off of finished bases to a render thread

Windowing, shader loading and the draw call itself belong to the host.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod camera;
pub mod input;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger control, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }

    pub mod math {
        pub use crate::math::*;
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod input {
        pub use crate::input::*;
    }
}

// Re-export math library at crate root
pub use glam;
