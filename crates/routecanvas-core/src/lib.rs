//! # RouteCanvas Core
//!
//! Core types, traits, and utilities shared by the RouteCanvas crates.
//! Provides the error hierarchy, the shape-listener capability used to
//! mirror selection state outside the canvas, the machine kind, and the
//! shared-state aliases used when a scene is read from several threads.

pub mod error;
pub mod listener;
pub mod machine;
pub mod types;

pub use error::{ConfigError, Error, Result, SceneError};
pub use listener::{Notify, ShapeListener};
pub use machine::MachineKind;

pub use types::{thread_safe_rw, ThreadSafeRw};
