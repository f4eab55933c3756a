use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::event::{
    InputEvent, PointerButton, PointerMove, Scroll, TouchPan, TouchPinch,
};

/// Converts winit window events into [`InputEvent`]s.
///
/// Tracks the last cursor position so button and wheel events carry a
/// position and cursor moves carry a delta.
pub struct WinitInputAdapter {
    last_mouse_pos: Option<Vec2>,
}

impl Default for WinitInputAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl WinitInputAdapter {
    /// Create an adapter with no known cursor position.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_mouse_pos: None,
        }
    }

    /// Translate one window event. Returns `None` for events the camera
    /// does not care about.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        let cursor = self.last_mouse_pos.unwrap_or(Vec2::ZERO);
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let current_pos =
                    Vec2::new(position.x as f32, position.y as f32);
                let delta = self
                    .last_mouse_pos
                    .map_or(Vec2::ZERO, |last| current_pos - last);
                self.last_mouse_pos = Some(current_pos);
                Some(InputEvent::PointerMove(PointerMove {
                    position: current_pos,
                    delta,
                }))
            }
            WindowEvent::CursorLeft { .. } => {
                self.last_mouse_pos = None;
                None
            }
            WindowEvent::MouseInput { button, state, .. } => {
                Some(InputEvent::PointerButton(PointerButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                    position: cursor,
                }))
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => Vec2::new(*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        Vec2::new(pos.x as f32, pos.y as f32) * 0.01
                    }
                };
                Some(InputEvent::Scroll(Scroll {
                    delta,
                    position: cursor,
                }))
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(InputEvent::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::PanGesture { delta, .. } => {
                Some(InputEvent::TouchPan(TouchPan {
                    delta: Vec2::new(delta.x, delta.y),
                }))
            }
            WindowEvent::PinchGesture { delta, .. } => {
                Some(InputEvent::TouchPinch(TouchPinch {
                    scale: 1.0 + *delta as f32,
                    center: cursor,
                }))
            }
            _ => None,
        }
    }
}
