//! Strip adapter — exposes [`LedStrip`] through the [`PixelSink`] port.

use std::time::Duration;

use smart_leds::SmartLedsWrite;

use crate::app::ports::PixelSink;
use crate::color::Rgb;
use crate::drivers::led_strip::LedStrip;
use crate::error::SinkError;

impl<W> PixelSink for LedStrip<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: core::fmt::Debug,
{
    fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<(), SinkError> {
        LedStrip::set_pixel(self, index, Rgb::new(r, g, b))
    }

    fn refresh(&mut self, timeout_ms: u32) -> Result<(), SinkError> {
        LedStrip::refresh(self, Duration::from_millis(u64::from(timeout_ms)))
    }
}
