//! Console client for the grid dungeon.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ logging  (file-backed tracing subscriber)
//!   ├─→ Runtime  (game state, commands, save slot)
//!   └─→ Console  (stdin/stdout frontend)
//! ```
//!
//! The console only talks to the runtime through commands and reads the
//! world back for display.

pub mod console;
pub mod logging;

pub use console::Console;
