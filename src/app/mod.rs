//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the rules of the status responder: classify each
//! inbound line and drive the indicators and alarm to match.  All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without real peripherals.

pub mod alarm;
pub mod events;
pub mod ports;
pub mod service;
pub mod state;
