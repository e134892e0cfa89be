//! Inbound commands to the light.
//!
//! These are what an upstream dispatcher (cluster command handler, button,
//! serial console) sends.  Each maps onto exactly one
//! [`LightWidget`](super::light::LightWidget) operation.

use super::ports::VirtualLedId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCommand {
    On,
    Off,
    Toggle,
    /// Set the brightness level applied while on.
    SetLevel(u8),
    /// Set hue and saturation together as one change.
    SetColor { hue: u8, saturation: u8 },
    /// Attach (`Some`) or detach (`None`) an on-screen indicator.
    BindVirtualLed(Option<VirtualLedId>),
}

impl LightCommand {
    /// Build a level command from a wider integer, saturating at 255.
    pub fn level_from_u16(raw: u16) -> Self {
        Self::SetLevel(u8::try_from(raw).unwrap_or(u8::MAX))
    }

    /// Build a colour command from wider integers, saturating each at 255.
    pub fn color_from_u16(hue: u16, saturation: u16) -> Self {
        Self::SetColor {
            hue: u8::try_from(hue).unwrap_or(u8::MAX),
            saturation: u8::try_from(saturation).unwrap_or(u8::MAX),
        }
    }
}
