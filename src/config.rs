//! Light controller configuration
//!
//! Board wiring and render parameters.  Defaults come from [`crate::pins`];
//! a board can override them with a JSON document at bring-up.  Logical
//! light state (power, level, colour) is deliberately not part of this.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::drivers::led_strip::MAX_STRIP_LEDS;
use crate::error::ConfigError;
use crate::pins;

/// Default budget for one strip refresh, in milliseconds.
pub const DEFAULT_REFRESH_TIMEOUT_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightConfig {
    // --- Strip ---
    /// GPIO driving the strip data line
    pub led_gpio: i32,
    /// RMT TX channel
    pub rmt_channel: u8,
    /// Pixels physically present on the strip
    pub max_leds: u16,
    /// The one pixel this controller manages
    pub pixel_index: u16,
    /// Refresh budget (milliseconds)
    pub refresh_timeout_ms: u32,

    // --- Display variant ---
    /// On-screen indicator mirroring the power state, if the board has one
    pub virtual_led: Option<u16>,

    // --- Input ---
    /// GPIO of the toggle button
    pub button_gpio: i32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            led_gpio: pins::LED_GPIO,
            rmt_channel: pins::LED_RMT_CHANNEL,
            max_leds: 1,
            pixel_index: 0,
            refresh_timeout_ms: DEFAULT_REFRESH_TIMEOUT_MS,
            virtual_led: None,
            button_gpio: pins::BUTTON_GPIO,
        }
    }
}

impl LightConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            warn!("Light config rejected: {}", e);
            ConfigError::Parse
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the strip driver cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_leds == 0 {
            return Err(ConfigError::ValidationFailed("max_leds must be > 0"));
        }
        if usize::from(self.max_leds) > MAX_STRIP_LEDS {
            return Err(ConfigError::ValidationFailed("max_leds exceeds strip buffer"));
        }
        if self.pixel_index >= self.max_leds {
            return Err(ConfigError::ValidationFailed("pixel_index must be < max_leds"));
        }
        if self.refresh_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed("refresh_timeout_ms must be > 0"));
        }
        Ok(())
    }
}
