/// InputCollector — samples winit events into one `FrameInput` per frame.
///
/// Feed it every `WindowEvent` and `DeviceEvent` the event loop delivers,
/// then call `take_frame()` once per redraw. Held movement keys persist
/// across frames; pointer motion, wheel and click edges are accumulated
/// and reset by `take_frame()`.

use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use super::{FrameInput, InputEvent, MoveDirection};

const SOURCE: &str = "galaxy3d::Input";

/// Wheel line deltas are converted to pixel units with this factor, so line
/// and pixel based devices zoom at the same rate.
pub const SCROLL_PIXELS_PER_LINE: f32 = 100.0;

/// Physical keys driving each movement direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
}

impl Default for KeyBindings {
    /// WASD to move on the ground plane, E/Q to rise and sink
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            up: KeyCode::KeyE,
            down: KeyCode::KeyQ,
        }
    }
}

impl KeyBindings {
    /// Direction bound to `key`, if any.
    pub fn direction(&self, key: KeyCode) -> Option<MoveDirection> {
        MoveDirection::ALL.into_iter().find(|&direction| self.key(direction) == key)
    }

    /// Key bound to `direction`.
    pub fn key(&self, direction: MoveDirection) -> KeyCode {
        match direction {
            MoveDirection::Forward => self.forward,
            MoveDirection::Back => self.back,
            MoveDirection::Left => self.left,
            MoveDirection::Right => self.right,
            MoveDirection::Up => self.up,
            MoveDirection::Down => self.down,
        }
    }
}

/// Accumulates winit input between frames.
#[derive(Debug, Default)]
pub struct InputCollector {
    bindings: KeyBindings,
    held: HashSet<MoveDirection>,
    motion: (f64, f64),
    scroll: f32,
    toggle_capture: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Whether the key for `direction` is currently held.
    pub fn is_held(&self, direction: MoveDirection) -> bool {
        self.held.contains(&direction)
    }

    // ===== WINIT ENTRY POINTS =====

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_key(code, event.state);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_button(*button, *state);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_scroll(*delta);
            }
            WindowEvent::Focused(false) => {
                // Key releases are lost while unfocused
                self.held.clear();
            }
            _ => {}
        }
    }

    /// Raw pointer motion comes from device events (unaffected by cursor grab).
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.handle_mouse_motion(delta.0, delta.1);
        }
    }

    // ===== DECODED INPUT =====

    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        let Some(direction) = self.bindings.direction(key) else {
            return;
        };
        match state {
            ElementState::Pressed => {
                self.held.insert(direction);
            }
            ElementState::Released => {
                self.held.remove(&direction);
            }
        }
    }

    /// A left button press is a capture toggle edge. Two presses within one
    /// frame cancel out.
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state == ElementState::Pressed {
            self.toggle_capture = !self.toggle_capture;
            crate::camera_trace!(SOURCE, "Capture toggle edge");
        }
    }

    pub fn handle_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.motion.0 += dx;
        self.motion.1 += dy;
    }

    /// Positive accumulated scroll means scrolling toward the user (down),
    /// which widens the field of view.
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        let pixels = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * SCROLL_PIXELS_PER_LINE,
            MouseScrollDelta::PixelDelta(position) => -(position.y as f32),
        };
        self.scroll += pixels;
    }

    // ===== FRAME =====

    /// Drain this frame's input.
    ///
    /// Emits one `Translate` per held key (in `MoveDirection::ALL` order),
    /// then a single `Look` with the summed pointer motion and a single
    /// `Zoom` with the summed wheel delta, each only when non-zero.
    pub fn take_frame(&mut self) -> FrameInput {
        let mut events: Vec<InputEvent> = MoveDirection::ALL
            .into_iter()
            .filter(|direction| self.held.contains(direction))
            .map(InputEvent::Translate)
            .collect();

        let (dx, dy) = std::mem::take(&mut self.motion);
        if dx != 0.0 || dy != 0.0 {
            events.push(InputEvent::Look { dx: dx as f32, dy: dy as f32 });
        }

        let scroll = std::mem::take(&mut self.scroll);
        if scroll != 0.0 {
            events.push(InputEvent::Zoom(scroll));
        }

        FrameInput {
            toggle_capture: std::mem::take(&mut self.toggle_capture),
            events,
        }
    }
}

#[cfg(test)]
#[path = "winit_input_tests.rs"]
mod tests;
