//! LED strip, bring-up and input drivers.

pub mod button;
pub mod hw_init;
pub mod led_strip;
