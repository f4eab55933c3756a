//! Single entry point between the embedding application and the active
//! manipulator.

use std::path::Path;

use glam::Vec2;

use crate::camera::Camera;
use crate::error::NavError;
use crate::input::{
    InputEvent, MouseButton, PointerButton, PointerMove, Scroll, TouchPan,
    TouchPinch,
};
use crate::manipulator::{CameraManipulator, Manipulator, ManipulatorKind};
use crate::options::Options;

const DEFAULT_NAME: &str = "CameraSystemController";
const DEFAULT_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Owns the camera and one manipulator, and routes input and frame
/// updates to it.
///
/// Switching [`ManipulatorKind`] destroys the active manipulator and
/// builds a fresh one, so drag and inertia state never carry over. The
/// new manipulator receives the controller's enabled flag, viewport size
/// and (if present) the camera.
///
/// Every handler records the cursor position it carries before doing
/// anything else, so [`CameraSystemController::handle_scroll`] can zoom
/// at the last hovered point. That position survives mode switches.
#[derive(Debug)]
pub struct CameraSystemController {
    name: String,
    camera: Option<Camera>,
    enabled: bool,
    viewport: Vec2,
    kind: ManipulatorKind,
    manipulator: Manipulator,
    options: Options,
    last_cursor: Vec2,
}

impl Default for CameraSystemController {
    fn default() -> Self {
        Self::new(ManipulatorKind::default())
    }
}

impl CameraSystemController {
    /// Create a controller running `kind` with default options and no
    /// camera.
    #[must_use]
    pub fn new(kind: ManipulatorKind) -> Self {
        Self::with_options(kind, Options::default())
    }

    /// Create a controller running `kind` tuned by `options`.
    #[must_use]
    pub fn with_options(kind: ManipulatorKind, options: Options) -> Self {
        let mut manipulator = Manipulator::create(kind, &options);
        manipulator.set_viewport_size(DEFAULT_VIEWPORT.x, DEFAULT_VIEWPORT.y);
        log::debug!("camera controller created with {} manipulator", manipulator.name());
        Self {
            name: DEFAULT_NAME.to_owned(),
            camera: None,
            enabled: true,
            viewport: DEFAULT_VIEWPORT,
            kind,
            manipulator,
            options,
            last_cursor: Vec2::ZERO,
        }
    }

    /// Controller name, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the controller.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    // -- Camera ----------------------------------------------------------

    /// Hand the camera to the controller and attach it to the active
    /// manipulator. Replaces any previous camera.
    pub fn set_camera(&mut self, mut camera: Camera) {
        if self.camera.is_some() {
            self.manipulator.detach_camera();
        }
        camera.set_viewport(self.viewport.x, self.viewport.y);
        self.manipulator.attach_camera(&camera);
        self.camera = Some(camera);
        log::debug!("{}: camera attached to {}", self.name, self.manipulator.name());
    }

    /// The controlled camera, if any.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Mutable access to the controlled camera.
    ///
    /// After changing the pose directly, call
    /// [`CameraSystemController::reattach_camera`] so the manipulator
    /// re-derives its state from it.
    pub fn camera_mut(&mut self) -> Option<&mut Camera> {
        self.camera.as_mut()
    }

    /// Take the camera back, leaving the controller without one.
    pub fn take_camera(&mut self) -> Option<Camera> {
        let camera = self.camera.take();
        if camera.is_some() {
            self.manipulator.detach_camera();
            log::debug!("{}: camera detached", self.name);
        }
        camera
    }

    /// Re-sync the active manipulator from the camera's current pose.
    pub fn reattach_camera(&mut self) {
        if let Some(camera) = &self.camera {
            self.manipulator.attach_camera(camera);
        }
    }

    // -- Manipulator -----------------------------------------------------

    /// Kind of the active manipulator.
    #[must_use]
    pub fn manipulator_kind(&self) -> ManipulatorKind {
        self.kind
    }

    /// The active manipulator.
    #[must_use]
    pub fn manipulator(&self) -> &Manipulator {
        &self.manipulator
    }

    /// Mutable access to the active manipulator.
    pub fn manipulator_mut(&mut self) -> &mut Manipulator {
        &mut self.manipulator
    }

    /// Run `f` with the active manipulator and the camera, for
    /// variant-specific operations that move the camera (view presets,
    /// setting the center of interest). Returns `None` without a camera.
    pub fn with_manipulator_and_camera<R>(
        &mut self,
        f: impl FnOnce(&mut Manipulator, &mut Camera) -> R,
    ) -> Option<R> {
        let camera = self.camera.as_mut()?;
        Some(f(&mut self.manipulator, camera))
    }

    /// Switch navigation paradigm. A no-op when `kind` is already active.
    pub fn set_manipulator(&mut self, kind: ManipulatorKind) {
        if self.kind == kind {
            return;
        }
        self.kind = kind;
        self.recreate_manipulator();
        log::info!("{}: switched to {} manipulator", self.name, self.manipulator.name());
    }

    /// Rebuild the active manipulator from scratch, dropping all drag and
    /// inertia state.
    pub fn reset(&mut self) {
        self.recreate_manipulator();
        log::debug!("{}: reset {} manipulator", self.name, self.manipulator.name());
    }

    fn recreate_manipulator(&mut self) {
        self.manipulator = Manipulator::create(self.kind, &self.options);
        self.manipulator.set_enabled(self.enabled);
        self.manipulator.set_viewport_size(self.viewport.x, self.viewport.y);
        if let Some(camera) = &self.camera {
            self.manipulator.attach_camera(camera);
        }
    }

    /// Scene-scale factor reported by the active manipulator.
    #[must_use]
    pub fn scene_scale(&self) -> f32 {
        self.manipulator.scene_scale()
    }

    // -- Options ---------------------------------------------------------

    /// Current navigation options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options and rebuild the active manipulator with them.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.recreate_manipulator();
    }

    /// Load options from a TOML file and apply them.
    pub fn load_options(&mut self, path: &Path) -> Result<(), NavError> {
        match Options::load(path) {
            Ok(options) => {
                log::info!("Loaded navigation options from '{}'", path.display());
                self.set_options(options);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load navigation options from '{}': {e}", path.display());
                Err(e)
            }
        }
    }

    /// Save the current options to a TOML file.
    pub fn save_options(&self, path: &Path) -> Result<(), NavError> {
        match self.options.save(path) {
            Ok(()) => {
                log::info!("Saved navigation options to '{}'", path.display());
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to save navigation options to '{}': {e}", path.display());
                Err(e)
            }
        }
    }

    // -- State -----------------------------------------------------------

    /// Enable or disable all input handling and updates.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.manipulator.set_enabled(enabled);
    }

    /// Whether input handling and updates are active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Track a viewport resize. Also updates the camera's aspect ratio.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.manipulator.set_viewport_size(width, height);
        if let Some(camera) = &mut self.camera {
            camera.set_viewport(width, height);
            camera.update_matrices();
        }
    }

    /// Viewport size as last set, in pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Vec2 {
        self.viewport
    }

    /// Last cursor position seen by any handler.
    #[must_use]
    pub fn last_cursor_position(&self) -> Vec2 {
        self.last_cursor
    }

    // -- Per-frame -------------------------------------------------------

    /// Advance inertia, movement and smoothing by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        if !self.enabled {
            return;
        }
        if let Some(camera) = &mut self.camera {
            self.manipulator.update(camera, dt);
        }
    }

    // -- Input -----------------------------------------------------------

    /// Cursor moved to `position` by `delta` pixels.
    pub fn handle_pointer_move(&mut self, position: Vec2, delta: Vec2, dt: f64) {
        self.last_cursor = position;
        if !self.enabled {
            return;
        }
        if let Some(camera) = &mut self.camera {
            self.manipulator
                .handle_pointer_move(camera, PointerMove { position, delta }, dt);
        }
    }

    /// Mouse button changed at `position`.
    pub fn handle_pointer_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        position: Vec2,
        dt: f64,
    ) {
        self.last_cursor = position;
        if !self.enabled {
            return;
        }
        if let Some(camera) = &mut self.camera {
            let event = PointerButton {
                button,
                pressed,
                position,
            };
            self.manipulator.handle_pointer_button(camera, event, dt);
        }
    }

    /// Scroll at the last known cursor position.
    pub fn handle_scroll(&mut self, delta: Vec2, dt: f64) {
        self.handle_scroll_at(delta, self.last_cursor, dt);
    }

    /// Scroll at an explicit cursor position.
    pub fn handle_scroll_at(&mut self, delta: Vec2, position: Vec2, dt: f64) {
        self.last_cursor = position;
        if !self.enabled {
            return;
        }
        if let Some(camera) = &mut self.camera {
            self.manipulator
                .handle_scroll(camera, Scroll { delta, position }, dt);
        }
    }

    /// Physical key changed. `key` is resolved through the key bindings;
    /// unbound keys are ignored.
    pub fn handle_keyboard(&mut self, key: &str, pressed: bool, dt: f64) {
        if !self.enabled {
            return;
        }
        if let Some(action) = self.options.keybindings.lookup(key) {
            self.manipulator.handle_key(action, pressed, dt);
        }
    }

    /// Two-finger pan by `delta` pixels.
    pub fn handle_touch_pan(&mut self, delta: Vec2, dt: f64) {
        if !self.enabled {
            return;
        }
        if let Some(camera) = &mut self.camera {
            self.manipulator
                .handle_touch_pan(camera, TouchPan { delta }, dt);
        }
    }

    /// Pinch by relative `scale` around `center`.
    pub fn handle_touch_pinch(&mut self, scale: f32, center: Vec2, dt: f64) {
        self.last_cursor = center;
        if !self.enabled {
            return;
        }
        if let Some(camera) = &mut self.camera {
            self.manipulator
                .handle_touch_pinch(camera, TouchPinch { scale, center }, dt);
        }
    }

    /// Route any [`InputEvent`] to the matching handler.
    pub fn handle_event(&mut self, event: &InputEvent, dt: f64) {
        match event {
            InputEvent::PointerMove(e) => self.handle_pointer_move(e.position, e.delta, dt),
            InputEvent::PointerButton(e) => {
                self.handle_pointer_button(e.button, e.pressed, e.position, dt);
            }
            InputEvent::Scroll(e) => self.handle_scroll_at(e.delta, e.position, dt),
            InputEvent::ScrollAtCursor { delta } => self.handle_scroll(*delta, dt),
            InputEvent::Key { key, pressed } => self.handle_keyboard(key, *pressed, dt),
            InputEvent::TouchPan(e) => self.handle_touch_pan(e.delta, dt),
            InputEvent::TouchPinch(e) => self.handle_touch_pinch(e.scale, e.center, dt),
        }
    }
}
