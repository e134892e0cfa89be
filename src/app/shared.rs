//! Thread-safe handle for hosts that drive the light from several tasks.
//!
//! The lock is held across the whole mutate-then-render sequence, so every
//! accepted change is rendered exactly once and renders never interleave.

use std::sync::{Arc, Mutex, PoisonError};

use super::commands::LightCommand;
use super::light::LightWidget;
use super::ports::NoMirror;

pub struct SharedLight<S, M = NoMirror> {
    inner: Arc<Mutex<LightWidget<S, M>>>,
}

impl<S, M> Clone for SharedLight<S, M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, M> SharedLight<S, M>
where
    S: super::ports::PixelSink,
    M: super::ports::VirtualMirror,
{
    pub fn new(widget: LightWidget<S, M>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(widget)),
        }
    }

    /// Run `f` with exclusive access to the widget.  A poisoned lock is
    /// recovered rather than propagated.
    pub fn with<R>(&self, f: impl FnOnce(&mut LightWidget<S, M>) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn handle_command(&self, cmd: LightCommand) {
        self.with(|w| w.handle_command(cmd));
    }

    pub fn is_on(&self) -> bool {
        self.with(|w| w.is_on())
    }

    pub fn brightness(&self) -> u8 {
        self.with(|w| w.brightness())
    }
}
