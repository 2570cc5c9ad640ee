//! Domain types shared across jamlink crates.
//!
//! - [`aliases`]: shared-state type aliases for the single-threaded UI
//! - [`audio`]: audio and server selection enums mirrored by the settings view

pub mod aliases;
pub mod audio;

pub use aliases::*;
pub use audio::*;
