//! Input handling: normalized event types, key actions, and an optional
//! winit adapter that converts raw window events into them.

/// Platform-agnostic input events.
pub mod event;
/// Bindable navigation actions.
pub mod keyboard;
/// Window-event adapter (requires the `viewer` feature).
#[cfg(feature = "viewer")]
pub mod winit_adapter;

pub use event::{
    InputEvent, MouseButton, PointerButton, PointerMove, Scroll, TouchPan,
    TouchPinch,
};
pub use keyboard::KeyAction;
#[cfg(feature = "viewer")]
pub use winit_adapter::WinitInputAdapter;
