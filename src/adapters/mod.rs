//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter      | Implements     | Connects to                 |
//! |--------------|----------------|-----------------------------|
//! | `strip`      | PixelSink      | WS2812 strip (RMT / memory) |
//! | `log_mirror` | VirtualMirror  | Serial log output           |

pub mod log_mirror;
pub mod strip;
