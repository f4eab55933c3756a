// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive viewport camera navigation.
//!
//! Camnav turns normalized pointer, keyboard and touch input into camera
//! pose changes under several navigation paradigms: arcball orbiting,
//! first-person flying, orthographic pan/zoom, and smoothed target
//! following.
//!
//! # Key entry points
//!
//! - [`controller::CameraSystemController`] - owns the camera and the active
//!   manipulator, forwards input and per-frame updates
//! - [`manipulator::CameraManipulator`] - the contract every navigation
//!   paradigm implements
//! - [`manipulator::OrbitArcballManipulator`] - arcball rotation, projection
//!   aware panning, three zoom policies and inertia
//! - [`camera::Camera`] - pose plus a tagged perspective/orthographic
//!   projection
//! - [`options::Options`] - TOML-backed tuning and key bindings
//!
//! # Architecture
//!
//! The controller is the single owner of the [`camera::Camera`]. Each call
//! lends the active manipulator a mutable borrow of it, so the camera stays
//! the only source of truth for the pose. Every interaction path is
//! best-effort: degenerate input (no camera, zero viewport, non-positive
//! `dt`, zero-length vectors) is skipped silently instead of reported.
//!
//! ```
//! use camnav::camera::Camera;
//! use camnav::controller::CameraSystemController;
//! use camnav::manipulator::ManipulatorKind;
//! use glam::{Vec2, Vec3};
//!
//! let camera = Camera::perspective(60.0, 16.0 / 9.0, 0.1, 100.0)
//!     .with_pose(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
//!
//! let mut controller =
//!     CameraSystemController::new(ManipulatorKind::OrbitArcball);
//! controller.set_camera(camera);
//! controller.set_viewport_size(800.0, 600.0);
//! controller.handle_scroll_at(Vec2::new(0.0, 1.0), Vec2::new(400.0, 300.0), 0.016);
//! controller.update(0.016);
//! ```

pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod manipulator;
pub mod options;
pub mod util;
