//! Addressable LED strip driver.
//!
//! Keeps a fixed-capacity frame of pixel colours and clocks it out through
//! any [`SmartLedsWrite`] writer.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: the writer is a WS2812 RMT channel (see `hw_init`).
//! On host/test: [`MemoryWriter`] records frames in memory only.

use std::time::{Duration, Instant};

use heapless::Vec;
use log::warn;
use smart_leds::SmartLedsWrite;

use crate::color::{BLACK, Rgb};
use crate::error::SinkError;

/// Largest strip the frame buffer can hold.
pub const MAX_STRIP_LEDS: usize = 100;

pub struct LedStrip<W> {
    writer: W,
    frame: Vec<Rgb, MAX_STRIP_LEDS>,
}

impl<W> LedStrip<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: core::fmt::Debug,
{
    /// Create a strip of `len` pixels, all black.  Lengths beyond
    /// [`MAX_STRIP_LEDS`] are clamped.
    pub fn new(writer: W, len: usize) -> Self {
        if len > MAX_STRIP_LEDS {
            warn!("Strip length {} clamped to {}", len, MAX_STRIP_LEDS);
        }
        let mut frame = Vec::new();
        frame.extend(core::iter::repeat_n(BLACK, len.min(MAX_STRIP_LEDS)));
        Self { writer, frame }
    }

    pub fn set_pixel(&mut self, index: usize, rgb: Rgb) -> Result<(), SinkError> {
        let slot = self
            .frame
            .get_mut(index)
            .ok_or(SinkError::IndexOutOfRange(index))?;
        *slot = rgb;
        Ok(())
    }

    /// Write the whole frame.  The writer blocks until the transfer is
    /// done; exceeding `timeout` is reported after the fact.
    pub fn refresh(&mut self, timeout: Duration) -> Result<(), SinkError> {
        let started = Instant::now();

        self.writer
            .write(self.frame.iter().copied())
            .map_err(|e| {
                warn!("LED strip write failed: {:?}", e);
                SinkError::WriteFailed
            })?;

        let elapsed = started.elapsed();
        if elapsed > timeout {
            return Err(SinkError::Timeout {
                elapsed_ms: elapsed.as_millis() as u32,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frame.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Staged colours (not necessarily written yet).
    pub fn pixels(&self) -> &[Rgb] {
        &self.frame
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

// ── Host-side writer ──────────────────────────────────────────

/// Writer that keeps the last frame in memory.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    last_frame: Vec<Rgb, MAX_STRIP_LEDS>,
    writes: u32,
    /// Make every subsequent write fail (for fault-injection tests).
    pub fail_writes: bool,
    /// Artificial transfer time per write.
    pub latency: Duration,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &[Rgb] {
        &self.last_frame
    }

    /// Frames successfully written since construction.
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl SmartLedsWrite for MemoryWriter {
    type Error = &'static str;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.fail_writes {
            return Err("simulated write failure");
        }
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        self.last_frame.clear();
        for pixel in iterator.into_iter().take(MAX_STRIP_LEDS) {
            // Capacity is guaranteed by the `take` above.
            let _ = self.last_frame.push(pixel.into());
        }
        self.writes += 1;
        Ok(())
    }
}
