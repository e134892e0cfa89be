//! Port traits — the boundary between the light state and the hardware.
//!
//! ```text
//!   LightWidget ──▶ PixelSink      (LED strip driver)
//!               └─▶ VirtualMirror  (on-screen indicator, display boards only)
//! ```
//!
//! Both are driven adapters: the widget calls into them, never the other
//! way round.  Sink failures are reported back but the widget treats them
//! as non-fatal.

use crate::error::SinkError;

// ───────────────────────────────────────────────────────────────
// Pixel sink (domain → strip hardware)
// ───────────────────────────────────────────────────────────────

/// Hardware endpoint that accepts pixel values and a flush command.
pub trait PixelSink {
    /// Stage a colour for pixel `index`.  Nothing is visible until
    /// [`refresh`](Self::refresh).
    fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<(), SinkError>;

    /// Push the staged frame to the LEDs, waiting at most `timeout_ms`
    /// for the transfer to complete.
    fn refresh(&mut self, timeout_ms: u32) -> Result<(), SinkError>;
}

// ───────────────────────────────────────────────────────────────
// Virtual mirror (domain → screen indicator)
// ───────────────────────────────────────────────────────────────

/// Identifier of an on-screen indicator.
pub type VirtualLedId = u16;

/// Secondary on/off indicator driven in parallel with the strip.
/// Receives the power state only, never colour.  Fire-and-forget.
pub trait VirtualMirror {
    fn set_indicator(&mut self, id: VirtualLedId, on: bool);
}

/// Mirror for boards without a screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMirror;

impl VirtualMirror for NoMirror {
    fn set_indicator(&mut self, _id: VirtualLedId, _on: bool) {}
}
