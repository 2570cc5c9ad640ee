//! Audio and server selection enums.
//!
//! Each enum that backs a combo box converts from the combo position with
//! `TryFrom<usize>` and back with `index()`. The item order is fixed and
//! matches the labels returned by `labels()`.

use crate::constants::{
    DELAY_LIGHT_GREEN_MAX_MS, DELAY_LIGHT_YELLOW_MAX_MS, FRAME_SIZE_FACTOR_DEFAULT,
    FRAME_SIZE_FACTOR_PREFERRED, FRAME_SIZE_FACTOR_SAFE, SYSTEM_FRAME_SIZE_SAMPLES,
};
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Audio channel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioChannels {
    /// Mono in, mono out
    #[default]
    Mono,
    /// Mono in, stereo out
    MonoInStereoOut,
    /// Stereo in, stereo out
    Stereo,
}

impl AudioChannels {
    /// All values in combo box order
    pub const ALL: [AudioChannels; 3] = [Self::Mono, Self::MonoInStereoOut, Self::Stereo];

    /// Combo box labels in index order
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|c| c.to_string()).collect()
    }

    /// Position of this value in the combo box
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for AudioChannels {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(Error::InvalidIndex {
            kind: "audio channels",
            index,
        })
    }
}

impl std::fmt::Display for AudioChannels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mono => write!(f, "Mono"),
            Self::MonoInStereoOut => write!(f, "Mono-in/Stereo-out"),
            Self::Stereo => write!(f, "Stereo"),
        }
    }
}

/// Audio codec quality level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    Low,
    #[default]
    Normal,
    High,
}

impl AudioQuality {
    /// All values in combo box order
    pub const ALL: [AudioQuality; 3] = [Self::Low, Self::Normal, Self::High];

    /// Combo box labels in index order
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|q| q.to_string()).collect()
    }

    /// Position of this value in the combo box
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for AudioQuality {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(Error::InvalidIndex {
            kind: "audio quality",
            index,
        })
    }
}

impl std::fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Normal => write!(f, "Normal"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Where the server list is fetched from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentralServerAddressType {
    /// User-entered address
    Manual,
    /// Built-in default central server
    #[default]
    Default,
    /// Built-in North America central server
    DefaultNorthAmerica,
}

impl CentralServerAddressType {
    /// All values in combo box order
    pub const ALL: [CentralServerAddressType; 3] =
        [Self::Manual, Self::Default, Self::DefaultNorthAmerica];

    /// Combo box labels in index order
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|t| t.to_string()).collect()
    }

    /// Position of this value in the combo box
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the user-entered address is in effect
    pub fn is_manual(self) -> bool {
        self == Self::Manual
    }
}

impl TryFrom<usize> for CentralServerAddressType {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(Error::InvalidIndex {
            kind: "central server address type",
            index,
        })
    }
}

impl std::fmt::Display for CentralServerAddressType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => write!(f, "Manual"),
            Self::Default => write!(f, "Default"),
            Self::DefaultNorthAmerica => write!(f, "Default (North America)"),
        }
    }
}

/// Main window skin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuiDesign {
    /// Plain toolkit widgets
    Standard,
    /// Fancy skin
    #[default]
    Original,
}

impl GuiDesign {
    /// Whether the fancy skin is in use
    pub fn is_fancy(self) -> bool {
        self == Self::Original
    }

    /// Map the "fancy skin" check box to a design
    pub fn from_fancy(fancy: bool) -> Self {
        if fancy {
            Self::Original
        } else {
            Self::Standard
        }
    }
}

/// Sound card buffer delay preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSizeFactor {
    Preferred,
    #[default]
    Default,
    Safe,
}

impl FrameSizeFactor {
    /// All presets in ascending buffer size
    pub const ALL: [FrameSizeFactor; 3] = [Self::Preferred, Self::Default, Self::Safe];

    /// Multiplier of the system frame size
    pub fn factor(self) -> u32 {
        match self {
            Self::Preferred => FRAME_SIZE_FACTOR_PREFERRED,
            Self::Default => FRAME_SIZE_FACTOR_DEFAULT,
            Self::Safe => FRAME_SIZE_FACTOR_SAFE,
        }
    }

    /// Sound card block size in mono samples
    pub fn buffer_size(self) -> u32 {
        self.factor() * SYSTEM_FRAME_SIZE_SAMPLES
    }

    /// Preset whose block size equals `buffer_size`, if any
    pub fn from_buffer_size(buffer_size: u32) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.buffer_size() == buffer_size)
    }

    /// Preset with the given multiplier, if any
    pub fn from_factor(factor: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.factor() == factor)
    }
}

/// Direction of a sound card channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelDirection {
    Input,
    Output,
}

/// One of the four channel mapping selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelSlot {
    LeftInput,
    RightInput,
    LeftOutput,
    RightOutput,
}

impl ChannelSlot {
    pub const ALL: [ChannelSlot; 4] = [
        Self::LeftInput,
        Self::RightInput,
        Self::LeftOutput,
        Self::RightOutput,
    ];

    /// Whether this slot maps an input or an output channel
    pub fn direction(self) -> ChannelDirection {
        match self {
            Self::LeftInput | Self::RightInput => ChannelDirection::Input,
            Self::LeftOutput | Self::RightOutput => ChannelDirection::Output,
        }
    }
}

/// Colour of the overall delay indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayLight {
    /// No measurement (client not running)
    #[default]
    Off,
    Green,
    Yellow,
    Red,
}

impl DelayLight {
    /// Classify an overall delay measurement
    pub fn for_overall_delay(delay_ms: u32) -> Self {
        if delay_ms <= DELAY_LIGHT_GREEN_MAX_MS {
            Self::Green
        } else if delay_ms <= DELAY_LIGHT_YELLOW_MAX_MS {
            Self::Yellow
        } else {
            Self::Red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_index_conversion() {
        for (i, c) in AudioChannels::ALL.iter().enumerate() {
            assert_eq!(AudioChannels::try_from(i).ok(), Some(*c));
            assert_eq!(c.index(), i);
        }
        assert!(AudioChannels::try_from(3).is_err());
        assert!(AudioQuality::try_from(3).is_err());
        assert_eq!(
            CentralServerAddressType::try_from(2).ok(),
            Some(CentralServerAddressType::DefaultNorthAmerica)
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            AudioChannels::labels(),
            vec!["Mono", "Mono-in/Stereo-out", "Stereo"]
        );
        assert_eq!(AudioQuality::labels(), vec!["Low", "Normal", "High"]);
        assert_eq!(
            CentralServerAddressType::labels(),
            vec!["Manual", "Default", "Default (North America)"]
        );
    }

    #[test]
    fn test_frame_size_factor() {
        assert_eq!(FrameSizeFactor::Preferred.buffer_size(), 64);
        assert_eq!(FrameSizeFactor::Default.buffer_size(), 128);
        assert_eq!(FrameSizeFactor::Safe.buffer_size(), 256);
        assert_eq!(
            FrameSizeFactor::from_buffer_size(256),
            Some(FrameSizeFactor::Safe)
        );
        assert_eq!(FrameSizeFactor::from_buffer_size(192), None);
        assert_eq!(FrameSizeFactor::from_factor(2), Some(FrameSizeFactor::Default));
        assert_eq!(FrameSizeFactor::from_factor(3), None);
    }

    #[test]
    fn test_delay_light_thresholds() {
        assert_eq!(DelayLight::for_overall_delay(0), DelayLight::Green);
        assert_eq!(DelayLight::for_overall_delay(43), DelayLight::Green);
        assert_eq!(DelayLight::for_overall_delay(44), DelayLight::Yellow);
        assert_eq!(DelayLight::for_overall_delay(68), DelayLight::Yellow);
        assert_eq!(DelayLight::for_overall_delay(69), DelayLight::Red);
    }

    #[test]
    fn test_gui_design_fancy() {
        assert!(GuiDesign::from_fancy(true).is_fancy());
        assert_eq!(GuiDesign::from_fancy(false), GuiDesign::Standard);
    }

    #[test]
    fn test_channel_slot_direction() {
        assert_eq!(ChannelSlot::RightInput.direction(), ChannelDirection::Input);
        assert_eq!(ChannelSlot::LeftOutput.direction(), ChannelDirection::Output);
    }
}
