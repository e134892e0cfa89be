//! One-shot strip bring-up.
//!
//! Validates the board config and binds the WS2812 strip to its RMT
//! channel.  Called once from `main()`; the result goes straight into
//! [`LightWidget::init`](crate::app::light::LightWidget::init), which
//! degrades to no output on failure.

use log::info;

use crate::config::LightConfig;
use crate::drivers::led_strip::LedStrip;
use crate::error::Result;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    /// The SoC has no RMT TX channel with this number.
    InvalidRmtChannel(u8),
    /// The RMT driver refused the channel/pin pair.
    RmtDriverFailed,
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidRmtChannel(ch) => write!(f, "no RMT TX channel {}", ch),
            Self::RmtDriverFailed => write!(f, "RMT driver install failed"),
        }
    }
}

// ── Writer selection ──────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub type StripWriter = ws2812_esp32_rmt_driver::Ws2812Esp32Rmt<'static>;

#[cfg(not(target_os = "espidf"))]
pub type StripWriter = crate::drivers::led_strip::MemoryWriter;

/// The strip type produced by [`bind_strip`].
pub type Strip = LedStrip<StripWriter>;

#[cfg(target_os = "espidf")]
pub fn bind_strip(config: &LightConfig) -> Result<Strip> {
    use esp_idf_hal::gpio::AnyOutputPin;
    use esp_idf_hal::rmt::{CHANNEL0, CHANNEL1};
    use ws2812_esp32_rmt_driver::Ws2812Esp32Rmt;

    config.validate()?;

    // SAFETY: called once from main() before anything else claims the
    // strip pin or RMT channel; each peripheral is handed to the driver
    // exactly once.
    let pin = unsafe { AnyOutputPin::new(config.led_gpio) };
    let writer = match config.rmt_channel {
        0 => Ws2812Esp32Rmt::new(unsafe { CHANNEL0::new() }, pin),
        1 => Ws2812Esp32Rmt::new(unsafe { CHANNEL1::new() }, pin),
        other => return Err(HwInitError::InvalidRmtChannel(other).into()),
    }
    .map_err(|e| {
        log::warn!("WS2812 RMT driver: {:?}", e);
        HwInitError::RmtDriverFailed
    })?;

    info!(
        "hw_init: WS2812 strip on GPIO{} (RMT ch{}, {} px)",
        config.led_gpio, config.rmt_channel, config.max_leds
    );
    Ok(LedStrip::new(writer, usize::from(config.max_leds)))
}

#[cfg(not(target_os = "espidf"))]
pub fn bind_strip(config: &LightConfig) -> Result<Strip> {
    config.validate()?;
    info!("hw_init(sim): in-memory strip, {} px", config.max_leds);
    Ok(LedStrip::new(
        crate::drivers::led_strip::MemoryWriter::new(),
        usize::from(config.max_leds),
    ))
}
