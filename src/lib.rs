//! LightWidget firmware library.
//!
//! Exposes the light core, drivers and adapters for integration testing.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod color;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
