// ABOUTME: Shared types and configuration for moto.
// ABOUTME: Defines key bindings, border kinds, and config file handling.

pub mod border;
pub mod config;
pub mod keys;

pub use border::BorderKind;
pub use config::{Config, ConfigError, LayoutMode, LayoutSettings};
pub use keys::{Action, KeyBindings};
