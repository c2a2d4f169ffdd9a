//! Input module — per-frame camera control events.
//!
//! The camera only understands `InputEvent`s. `InputCollector` builds them
//! from winit events; hosts with another windowing layer can build them
//! directly.

mod winit_input;

pub use winit_input::{InputCollector, KeyBindings, SCROLL_PIXELS_PER_LINE};

/// Camera-relative movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl MoveDirection {
    /// All directions, in the order the collector emits them
    pub const ALL: [MoveDirection; 6] = [
        MoveDirection::Forward,
        MoveDirection::Back,
        MoveDirection::Left,
        MoveDirection::Right,
        MoveDirection::Up,
        MoveDirection::Down,
    ];
}

/// One camera control event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Move one step (the camera's configured speed) along a direction
    Translate(MoveDirection),
    /// Raw pointer motion, positive dx to the right, positive dy downward
    Look { dx: f32, dy: f32 },
    /// Scroll delta, positive widens the field of view
    Zoom(f32),
}

/// Everything sampled for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// A capture toggle edge (click) happened since the last frame
    pub toggle_capture: bool,
    /// Control events in arrival order
    pub events: Vec<InputEvent>,
}

impl FrameInput {
    pub fn is_empty(&self) -> bool {
        !self.toggle_capture && self.events.is_empty()
    }
}
