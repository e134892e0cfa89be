//! Log-based virtual mirror.
//!
//! Implements [`VirtualMirror`] by writing indicator changes to the log
//! (UART / USB-CDC in production).  A screen driver would implement the
//! same trait.

use log::info;

use crate::app::ports::{VirtualLedId, VirtualMirror};

/// Adapter that logs every indicator update to the serial console.
pub struct LogMirror;

impl LogMirror {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualMirror for LogMirror {
    fn set_indicator(&mut self, id: VirtualLedId, on: bool) {
        info!("VLED | {} -> {}", id, if on { "ON" } else { "OFF" });
    }
}
