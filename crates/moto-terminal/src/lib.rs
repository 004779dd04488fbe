// ABOUTME: Terminal session and input handling.
// ABOUTME: Wraps crossterm to own the screen and turn events into key strings.

pub mod input;
pub mod session;

pub use input::{read_input, to_input, InputEvent};
pub use session::{TerminalError, TerminalSession};
