//! Application core — light state logic, zero I/O.
//!
//! The strip and the optional screen indicator are reached only through
//! the **port traits** in [`ports`], so the whole core runs on the host
//! against mock adapters.

pub mod commands;
pub mod light;
pub mod ports;
pub mod shared;
