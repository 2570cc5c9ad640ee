//! jamlink Settings Crate
//!
//! Handles client configuration, settings persistence, and the local client
//! model that owns them at runtime.

pub mod config;
pub mod error;
pub mod local_client;
pub mod manager;

pub use config::{
    AudioSettings, ClientSettings, JitterBufferSettings, ServerListSettings, SoundCardSettings,
    UiSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use local_client::{LocalClient, SoundCardDevice};
pub use manager::SettingsManager;
