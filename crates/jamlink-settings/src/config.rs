//! Configuration and settings management for jamlink
//!
//! Provides configuration file handling and validation for everything the
//! client persists between sessions. Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Jitter buffer sizes and the auto-sizing flag
//! - Sound card selection, channel mapping, and buffer delay preset
//! - Audio channel mode, quality, and small network buffers
//! - Server list (central server) address
//! - UI preferences (skin, level meters, new-client fader level)

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use jamlink_core::constants::{
    DEFAULT_NEW_CLIENT_LEVEL, DEF_NET_BUF_SIZE_NUM_BL, MAX_NET_BUF_SIZE_NUM_BL,
    MAX_NEW_CLIENT_LEVEL, MIN_NET_BUF_SIZE_NUM_BL,
};
use jamlink_core::{
    AudioChannels, AudioQuality, CentralServerAddressType, ChannelSlot, FrameSizeFactor,
    GuiDesign,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Jitter buffer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JitterBufferSettings {
    /// Local jitter-buffer size in network blocks
    pub local_frames: u32,
    /// Jitter-buffer size requested from the server
    pub server_frames: u32,
    /// Let the client size both buffers automatically
    pub auto: bool,
}

impl Default for JitterBufferSettings {
    fn default() -> Self {
        Self {
            local_frames: DEF_NET_BUF_SIZE_NUM_BL,
            server_frames: DEF_NET_BUF_SIZE_NUM_BL,
            auto: true,
        }
    }
}

/// Sound card settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundCardSettings {
    /// Name of the last working device; `None` selects the first device
    pub device_name: Option<String>,
    pub left_input_channel: usize,
    pub right_input_channel: usize,
    pub left_output_channel: usize,
    pub right_output_channel: usize,
    /// Requested buffer delay preset
    pub preferred_frame_size_factor: FrameSizeFactor,
}

impl SoundCardSettings {
    /// Device channel mapped to a slot
    pub fn channel(&self, slot: ChannelSlot) -> usize {
        match slot {
            ChannelSlot::LeftInput => self.left_input_channel,
            ChannelSlot::RightInput => self.right_input_channel,
            ChannelSlot::LeftOutput => self.left_output_channel,
            ChannelSlot::RightOutput => self.right_output_channel,
        }
    }

    /// Mutable access to the channel mapped to a slot
    pub fn channel_mut(&mut self, slot: ChannelSlot) -> &mut usize {
        match slot {
            ChannelSlot::LeftInput => &mut self.left_input_channel,
            ChannelSlot::RightInput => &mut self.right_input_channel,
            ChannelSlot::LeftOutput => &mut self.left_output_channel,
            ChannelSlot::RightOutput => &mut self.right_output_channel,
        }
    }
}

impl Default for SoundCardSettings {
    fn default() -> Self {
        Self {
            device_name: None,
            left_input_channel: 0,
            right_input_channel: 1,
            left_output_channel: 0,
            right_output_channel: 1,
            preferred_frame_size_factor: FrameSizeFactor::default(),
        }
    }
}

/// Audio settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub channels: AudioChannels,
    pub quality: AudioQuality,
    /// Allow small network buffers
    pub enable_opus64: bool,
}

/// Server list settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerListSettings {
    pub address_type: CentralServerAddressType,
    /// Address used when `address_type` is manual
    pub manual_address: String,
}

/// UI preference settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub gui_design: GuiDesign,
    /// Show level meters in the mixer channel strips
    pub display_channel_levels: bool,
    /// Fader level in percent for newly connected clients
    pub new_client_fader_level: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            gui_design: GuiDesign::default(),
            display_channel_levels: true,
            new_client_fader_level: DEFAULT_NEW_CLIENT_LEVEL,
        }
    }
}

/// Complete client configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub jitter_buffer: JitterBufferSettings,
    pub sound_card: SoundCardSettings,
    pub audio: AudioSettings,
    pub server_list: ServerListSettings,
    pub ui: UiSettings,
}

impl ClientSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate settings ranges
    pub fn validate(&self) -> ConfigResult<()> {
        let net_buf_range = MIN_NET_BUF_SIZE_NUM_BL..=MAX_NET_BUF_SIZE_NUM_BL;

        if !net_buf_range.contains(&self.jitter_buffer.local_frames) {
            return Err(out_of_range(
                "jitter_buffer.local_frames",
                self.jitter_buffer.local_frames,
            ));
        }

        if !net_buf_range.contains(&self.jitter_buffer.server_frames) {
            return Err(out_of_range(
                "jitter_buffer.server_frames",
                self.jitter_buffer.server_frames,
            ));
        }

        if self.ui.new_client_fader_level > MAX_NEW_CLIENT_LEVEL {
            return Err(out_of_range(
                "ui.new_client_fader_level",
                self.ui.new_client_fader_level,
            ));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = ClientSettings::new();
        assert!(settings.validate().is_ok());
        assert!(settings.jitter_buffer.auto);
        assert_eq!(settings.ui.new_client_fader_level, 100);
        assert_eq!(
            settings.server_list.address_type,
            CentralServerAddressType::Default
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut settings = ClientSettings::new();
        settings.jitter_buffer.local_frames = 0;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));

        let mut settings = ClientSettings::new();
        settings.jitter_buffer.server_frames = 21;
        assert!(settings.validate().is_err());

        let mut settings = ClientSettings::new();
        settings.ui.new_client_fader_level = 101;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_toml_file_keeps_every_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = ClientSettings::new();
        settings.jitter_buffer.local_frames = 4;
        settings.jitter_buffer.auto = false;
        settings.sound_card.device_name = Some("USB Interface".to_string());
        settings.sound_card.preferred_frame_size_factor = FrameSizeFactor::Safe;
        settings.audio.channels = AudioChannels::Stereo;
        settings.server_list.address_type = CentralServerAddressType::Manual;
        settings.server_list.manual_address = "jam.example.org:22124".to_string();
        settings.ui.gui_design = GuiDesign::Standard;

        settings.save_to_file(&path).unwrap();
        let loaded = ClientSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_json_file_is_supported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = ClientSettings::new();
        settings.audio.quality = AudioQuality::High;
        settings.save_to_file(&path).unwrap();

        let loaded = ClientSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded.audio.quality, AudioQuality::High);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[audio]\nquality = \"low\"\n").unwrap();

        let loaded = ClientSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded.audio.quality, AudioQuality::Low);
        assert_eq!(loaded.jitter_buffer, JitterBufferSettings::default());
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[jitter_buffer]\nauto = false\n\n\
             [sound_card]\ndevice_name = \"USB\"\n\n\
             [ui]\ngui_design = \"standard\"\n",
        )
        .unwrap();

        let loaded = ClientSettings::load_from_file(&path).unwrap();
        assert!(!loaded.jitter_buffer.auto);
        assert_eq!(loaded.jitter_buffer.local_frames, DEF_NET_BUF_SIZE_NUM_BL);
        assert_eq!(loaded.sound_card.device_name.as_deref(), Some("USB"));
        assert_eq!(loaded.sound_card.right_input_channel, 1);
        assert_eq!(loaded.ui.gui_design, GuiDesign::Standard);
        assert!(loaded.ui.display_channel_levels);
        assert_eq!(loaded.ui.new_client_fader_level, DEFAULT_NEW_CLIENT_LEVEL);
    }

    #[test]
    fn test_partial_json_section_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"ui": {"new_client_fader_level": 40}}"#).unwrap();

        let loaded = ClientSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded.ui.new_client_fader_level, 40);
        assert!(loaded.ui.display_channel_levels);
        assert_eq!(loaded.sound_card, SoundCardSettings::default());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.ini");
        let err = ClientSettings::new().save_to_file(&path).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_channel_slot_accessors() {
        let mut sound_card = SoundCardSettings::default();
        *sound_card.channel_mut(ChannelSlot::RightOutput) = 5;
        assert_eq!(sound_card.channel(ChannelSlot::RightOutput), 5);
        assert_eq!(sound_card.channel(ChannelSlot::RightInput), 1);
    }
}
