//! SafeVision status responder firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod pins;
pub mod protocol;

// Hardware-facing modules; on host targets they fall back to simulation
// stubs so the crate still compiles and tests run.
pub mod adapters;
pub mod drivers;
