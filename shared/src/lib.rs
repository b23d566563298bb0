//! Platform-independent model for the tab shell.
//!
//! Everything the frontend renders is derived from a [`ShellState`]; every
//! user interaction becomes a [`ShellAction`] applied through
//! [`ShellState::apply`]. Records are never mutated in place: each change
//! produces a new record that differs from the old one in a single field.

pub mod error;
pub mod profile;
pub mod settings;
pub mod shell;
pub mod tab;

pub use error::FieldError;
pub use profile::{Profile, ProfileField};
pub use settings::{ControlValue, Language, Settings, SettingsField, Theme};
pub use shell::{ShellAction, ShellState};
pub use tab::Tab;
