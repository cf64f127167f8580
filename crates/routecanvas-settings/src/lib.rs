//! RouteCanvas Settings Crate
//!
//! Handles application configuration: machine kind, plane origin,
//! selection tolerances and view flags.

pub mod config;

pub use config::{
    Config, HitRegion, MachineSettings, PlaneSettings, SelectionSettings, ViewSettings,
};
pub use routecanvas_core::MachineKind;
