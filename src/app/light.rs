//! Light state — the single-zone LED core.
//!
//! [`LightWidget`] holds the logical power state, brightness and colour,
//! and reduces them to one RGB pixel whenever something actually changes.
//!
//! ```text
//!  set_power / toggle_power ──▶ ┌──────────────┐ ──▶ PixelSink
//!  set_brightness / set_color ─▶│ LightWidget  │
//!  bind_virtual_mirror ────────▶│  HSV → RGB   │ ──▶ VirtualMirror
//!                               └──────────────┘
//! ```
//!
//! Rendering is synchronous: a setter returns only after the strip refresh
//! has completed or failed.  Hardware failures are logged and swallowed;
//! the in-memory state is updated regardless.

use log::{debug, info, warn};

use crate::color::{self, Hsv, Rgb};
use crate::config::LightConfig;
use crate::error::Result;

use super::commands::LightCommand;
use super::ports::{NoMirror, PixelSink, VirtualLedId, VirtualMirror};

const DEFAULT_BRIGHTNESS: u8 = u8::MAX;

pub struct LightWidget<S, M = NoMirror> {
    is_on: bool,
    brightness: u8,
    hue: u8,
    saturation: u8,
    sink: Option<S>,
    mirror: M,
    virtual_led: Option<VirtualLedId>,
    pixel_index: usize,
    refresh_timeout_ms: u32,
}

impl<S: PixelSink> LightWidget<S, NoMirror> {
    /// Plain variant: strip only, no on-screen indicator.
    pub fn new(config: &LightConfig) -> Self {
        Self::with_mirror(config, NoMirror)
    }
}

impl<S: PixelSink, M: VirtualMirror> LightWidget<S, M> {
    /// Display variant: the power state is also mirrored to `mirror`
    /// once an indicator is bound.
    pub fn with_mirror(config: &LightConfig, mirror: M) -> Self {
        Self {
            is_on: false,
            brightness: DEFAULT_BRIGHTNESS,
            hue: 0,
            saturation: 0,
            sink: None,
            mirror,
            virtual_led: None,
            pixel_index: usize::from(config.pixel_index),
            refresh_timeout_ms: config.refresh_timeout_ms,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Reset to defaults (off, full level, white) and bind the strip.
    ///
    /// A failed binding leaves the widget without a sink: every later
    /// render becomes a no-op instead of an error.  Does not render.
    pub fn init(&mut self, binding: Result<S>) {
        self.is_on = false;
        self.brightness = DEFAULT_BRIGHTNESS;
        self.hue = 0;
        self.saturation = 0;

        self.sink = match binding {
            Ok(sink) => Some(sink),
            Err(e) => {
                warn!("LED strip unavailable ({}), running without output", e);
                None
            }
        };
    }

    // ── Setters ───────────────────────────────────────────────

    pub fn set_power(&mut self, on: bool) {
        info!("Setting state to {}", u8::from(on));
        if on == self.is_on {
            return;
        }
        self.is_on = on;
        self.render();
    }

    /// Flip the power state.  Never skipped, even for back-to-back calls.
    pub fn toggle_power(&mut self) {
        info!("Toggling state to {}", u8::from(!self.is_on));
        self.is_on = !self.is_on;
        self.render();
    }

    pub fn set_brightness(&mut self, level: u8) {
        info!("Setting brightness to {}", level);
        if level == self.brightness {
            return;
        }
        self.brightness = level;
        self.render();
    }

    /// Set hue and saturation together; renders at most once.
    pub fn set_color(&mut self, hue: u8, saturation: u8) {
        if hue == self.hue && saturation == self.saturation {
            return;
        }
        debug!("Setting colour to h={} s={}", hue, saturation);
        self.hue = hue;
        self.saturation = saturation;
        self.render();
    }

    /// Attach or detach the on-screen indicator.  A newly attached
    /// indicator is updated straight away.
    pub fn bind_virtual_mirror(&mut self, id: Option<VirtualLedId>) {
        self.virtual_led = id;
        self.mirror_power();
    }

    /// Apply an inbound command.
    pub fn handle_command(&mut self, cmd: LightCommand) {
        match cmd {
            LightCommand::On => self.set_power(true),
            LightCommand::Off => self.set_power(false),
            LightCommand::Toggle => self.toggle_power(),
            LightCommand::SetLevel(level) => self.set_brightness(level),
            LightCommand::SetColor { hue, saturation } => self.set_color(hue, saturation),
            LightCommand::BindVirtualLed(id) => self.bind_virtual_mirror(id),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Configured level.  Unaffected by the power state.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn hue(&self) -> u8 {
        self.hue
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn virtual_led(&self) -> Option<VirtualLedId> {
        self.virtual_led
    }

    /// Colour the strip shows for the current state (black while off).
    pub fn effective_rgb(&self) -> Rgb {
        let val = if self.is_on { self.brightness } else { 0 };
        color::hsv_to_rgb(Hsv {
            hue: self.hue,
            sat: self.saturation,
            val,
        })
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    // ── Internal ──────────────────────────────────────────────

    fn render(&mut self) {
        let rgb = self.effective_rgb();

        if let Some(sink) = self.sink.as_mut() {
            debug!("Render pixel {} -> ({}, {}, {})", self.pixel_index, rgb.r, rgb.g, rgb.b);
            if let Err(e) = push_pixel(sink, self.pixel_index, rgb, self.refresh_timeout_ms) {
                warn!("LED strip update failed: {}", e);
            }
        }

        self.mirror_power();
    }

    fn mirror_power(&mut self) {
        if let Some(id) = self.virtual_led {
            self.mirror.set_indicator(id, self.is_on);
        }
    }
}

fn push_pixel(sink: &mut impl PixelSink, index: usize, rgb: Rgb, timeout_ms: u32) -> Result<()> {
    sink.set_pixel(index, rgb.r, rgb.g, rgb.b)?;
    sink.refresh(timeout_ms)?;
    Ok(())
}
