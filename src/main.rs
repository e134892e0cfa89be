//! LightWidget Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │  ButtonDriver ──▶ LightCommand ──▶ LightWidget         │
//! │                                     │        │         │
//! │                          LedStrip (RMT)   LogMirror    │
//! │                          (PixelSink)   (VirtualMirror) │
//! └────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::time::{Duration, Instant};

use anyhow::Result;
use esp_idf_hal::gpio::{AnyIOPin, PinDriver, Pull};
use log::{info, warn};

use lightwidget::adapters::log_mirror::LogMirror;
use lightwidget::app::light::LightWidget;
use lightwidget::config::LightConfig;
use lightwidget::drivers::button::ButtonDriver;
use lightwidget::drivers::hw_init;

/// Button sampling period.
const BUTTON_POLL_MS: u64 = 10;

/// Board override baked in at build time, e.g.
/// `LIGHT_CONFIG_JSON='{"led_gpio":15,...}' cargo build`.
const CONFIG_OVERRIDE: Option<&str> = option_env!("LIGHT_CONFIG_JSON");

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("LightWidget v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config ─────────────────────────────────────────────
    let config = match CONFIG_OVERRIDE.map(LightConfig::from_json) {
        Some(Ok(cfg)) => {
            info!("Using board config override");
            cfg
        }
        Some(Err(e)) => {
            warn!("Board config override rejected ({}), using defaults", e);
            LightConfig::default()
        }
        None => LightConfig::default(),
    };

    // ── 3. Light ──────────────────────────────────────────────
    let mut light = LightWidget::with_mirror(&config, LogMirror::new());
    light.init(hw_init::bind_strip(&config));
    light.bind_virtual_mirror(config.virtual_led);
    light.set_power(true);

    // ── 4. Button ─────────────────────────────────────────────
    // SAFETY: the button pin is claimed only here.
    let mut button_pin = PinDriver::input(unsafe { AnyIOPin::new(config.button_gpio) })?;
    button_pin.set_pull(Pull::Up)?;
    let mut button = ButtonDriver::new();

    info!("System ready. Entering event loop.");

    // ── 5. Event loop ─────────────────────────────────────────
    let boot = Instant::now();
    loop {
        let now_ms = boot.elapsed().as_millis() as u32;
        if let Some(event) = button.tick(now_ms, button_pin.is_low()) {
            info!("Button: {:?}", event);
            light.handle_command(event.command());
        }
        std::thread::sleep(Duration::from_millis(BUTTON_POLL_MS));
    }
}
