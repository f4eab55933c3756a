use glam::Vec2;

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button, by platform index.
    Other(u16),
}

impl MouseButton {
    /// Map a GLFW-style button index (0 = left, 1 = right, 2 = middle).
    #[must_use]
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Middle,
            other => Self::Other(other),
        }
    }

    /// Whether this is the secondary or middle button.
    #[must_use]
    pub fn is_pan_button(self) -> bool {
        matches!(self, Self::Right | Self::Middle)
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(n) => Self::Other(n),
        }
    }
}

/// Cursor moved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerMove {
    /// Absolute cursor position in physical pixels.
    pub position: Vec2,
    /// Movement since the previous pointer event, in pixels.
    pub delta: Vec2,
}

/// Mouse button pressed or released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerButton {
    /// Which button changed.
    pub button: MouseButton,
    /// `true` for press, `false` for release.
    pub pressed: bool,
    /// Cursor position at the time of the change.
    pub position: Vec2,
}

/// Scroll wheel or trackpad scroll.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scroll {
    /// Scroll amount per axis (positive y = zoom in).
    pub delta: Vec2,
    /// Cursor position the scroll applies to.
    pub position: Vec2,
}

/// Two-finger pan gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPan {
    /// Pan amount in pixels.
    pub delta: Vec2,
}

/// Pinch gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPinch {
    /// Relative scale since the previous pinch event (>1 = spread).
    pub scale: f32,
    /// Pinch center in pixels.
    pub center: Vec2,
}

impl Default for TouchPinch {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center: Vec2::ZERO,
        }
    }
}

/// Platform-agnostic input events.
///
/// Fed into
/// [`CameraSystemController::handle_event`](crate::controller::CameraSystemController::handle_event)
/// together with the frame `dt`.
///
/// # Example
///
/// ```ignore
/// controller.handle_event(
///     &InputEvent::Key { key: "KeyW".to_owned(), pressed: true },
///     dt,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Cursor moved.
    PointerMove(PointerMove),
    /// Mouse button changed.
    PointerButton(PointerButton),
    /// Scroll at an explicit cursor position.
    Scroll(Scroll),
    /// Scroll at the last known cursor position.
    ScrollAtCursor {
        /// Scroll amount per axis.
        delta: Vec2,
    },
    /// Physical key changed.
    Key {
        /// Key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"ShiftLeft"`, ...).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Two-finger pan.
    TouchPan(TouchPan),
    /// Pinch zoom.
    TouchPinch(TouchPinch),
}
