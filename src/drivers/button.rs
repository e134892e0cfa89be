//! Debounced toggle button with short and long press detection.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up.  The main loop samples the
//! pin level every few milliseconds and feeds it to [`ButtonDriver::tick`],
//! which runs the debounce + gesture state machine.
//!
//! | Gesture     | Condition                 | Command             |
//! |-------------|---------------------------|---------------------|
//! | Short press | Released before 2s        | Toggle power        |
//! | Long press  | Held for 2s               | Back to white       |

use crate::app::commands::LightCommand;

const DEBOUNCE_MS: u32 = 50;
const LONG_PRESS_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    ShortPress,
    LongPress,
}

impl ButtonEvent {
    /// Command the light should receive for this gesture.
    pub fn command(self) -> LightCommand {
        match self {
            Self::ShortPress => LightCommand::Toggle,
            Self::LongPress => LightCommand::SetColor {
                hue: 0,
                saturation: 0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Released,
    Debouncing { since_ms: u32 },
    Held { since_ms: u32 },
    /// Long press already reported; wait for release.
    LongReported,
}

pub struct ButtonDriver {
    state: GestureState,
}

impl ButtonDriver {
    pub fn new() -> Self {
        Self {
            state: GestureState::Released,
        }
    }

    /// Feed one raw sample (`pressed` = button down) taken at `now_ms`.
    pub fn tick(&mut self, now_ms: u32, pressed: bool) -> Option<ButtonEvent> {
        match (self.state, pressed) {
            (GestureState::Released, true) => {
                self.state = GestureState::Debouncing { since_ms: now_ms };
                None
            }
            (GestureState::Released, false) => None,

            (GestureState::Debouncing { since_ms }, true) => {
                if now_ms.wrapping_sub(since_ms) >= DEBOUNCE_MS {
                    self.state = GestureState::Held { since_ms };
                }
                None
            }
            // Bounce shorter than the debounce window.
            (GestureState::Debouncing { .. }, false) => {
                self.state = GestureState::Released;
                None
            }

            (GestureState::Held { since_ms }, true) => {
                if now_ms.wrapping_sub(since_ms) >= LONG_PRESS_MS {
                    self.state = GestureState::LongReported;
                    Some(ButtonEvent::LongPress)
                } else {
                    None
                }
            }
            (GestureState::Held { .. }, false) => {
                self.state = GestureState::Released;
                Some(ButtonEvent::ShortPress)
            }

            (GestureState::LongReported, true) => None,
            (GestureState::LongReported, false) => {
                self.state = GestureState::Released;
                None
            }
        }
    }
}

impl Default for ButtonDriver {
    fn default() -> Self {
        Self::new()
    }
}
