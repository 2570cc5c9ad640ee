//! # jamlink
//!
//! Client settings for a networked music rehearsal client.
//!
//! ## Architecture
//!
//! jamlink is organized as a workspace with multiple crates:
//!
//! 1. **jamlink-core** - Constants, domain enums, errors, the `ClientModel` trait
//! 2. **jamlink-settings** - Persisted configuration and the local client model
//! 3. **jamlink-ui** - Settings dialog view model, status display, refresh timer
//! 4. **jamlink** - Main binary that wires the crates together

pub use jamlink_core::{
    AudioChannels, AudioQuality, CentralServerAddressType, ChannelSlot, ClientModel, DelayLight,
    Error, FrameSizeFactor, GuiDesign, Result, SoundCardError,
};

pub use jamlink_settings::{ClientSettings, LocalClient, SettingsManager, SoundCardDevice};

pub use jamlink_ui::{
    spawn_status_timer, ClientSettingsDialog, DialogOptions, LogPresenter, MessagePresenter,
    RfdPresenter, SettingsChange, SettingsSnapshot,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support
///
/// Stdout is left free for the snapshot the binary prints.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // Windows release builds have no console; log next to the executable
    #[cfg(all(target_os = "windows", not(debug_assertions)))]
    {
        use std::fs::OpenOptions;

        let log_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| std::path::PathBuf::from("."));

        let log_file = log_dir.join("jamlink.log");

        match OpenOptions::new().create(true).append(true).open(&log_file) {
            Ok(file) => {
                let fmt_layer = fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true)
                    .with_ansi(false);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()?;
            }
            Err(_) => {
                tracing_subscriber::registry().with(env_filter).try_init()?;
            }
        }
    }

    #[cfg(not(all(target_os = "windows", not(debug_assertions))))]
    {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
