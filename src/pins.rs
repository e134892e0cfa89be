//! Default GPIO / RMT assignments.
//!
//! Values match the ESP32-C3-DevKitM-1: an on-board WS2812 on GPIO 8 and
//! the BOOT button on GPIO 9.  Boards with other wiring override these
//! through [`LightConfig`](crate::config::LightConfig).

/// Data line of the WS2812 strip / on-board pixel.
pub const LED_GPIO: i32 = 8;

/// RMT TX channel that clocks out the WS2812 waveform.
pub const LED_RMT_CHANNEL: u8 = 0;

/// Active-low momentary button (BOOT) with internal pull-up.
pub const BUTTON_GPIO: i32 = 9;
