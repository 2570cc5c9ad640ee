//! Client model interface
//!
//! Defines the capability set the settings view needs from the client that
//! owns audio and network configuration. The client is the single source of
//! truth: it may clamp, coerce, or reject any value written through this
//! interface, so callers re-read after every write.

use crate::error::SoundCardError;
use crate::types::{
    AudioChannels, AudioQuality, CentralServerAddressType, ChannelDirection, ChannelSlot,
    FrameSizeFactor, GuiDesign,
};

/// Accessor/mutator contract of the client model.
///
/// All methods are called from the UI thread.
pub trait ClientModel {
    // Jitter buffer ---------------------------------------------------------

    /// Local jitter-buffer size in network blocks
    fn sock_buf_num_frames(&self) -> u32;

    /// Set the local jitter-buffer size
    fn set_sock_buf_num_frames(&mut self, frames: u32);

    /// Jitter-buffer size requested from the server, in network blocks
    fn server_sock_buf_num_frames(&self) -> u32;

    /// Set the jitter-buffer size requested from the server
    fn set_server_sock_buf_num_frames(&mut self, frames: u32);

    /// Whether both jitter-buffer sizes are chosen automatically
    fn auto_sock_buf_size(&self) -> bool;

    /// Enable or disable automatic jitter-buffer sizing
    fn set_auto_sock_buf_size(&mut self, enabled: bool);

    // Sound card ------------------------------------------------------------

    /// Names of all sound card devices, in selector order
    fn sound_card_device_names(&self) -> Vec<String>;

    /// Index of the device currently in use
    fn sound_card_device(&self) -> usize;

    /// Switch to another device.
    ///
    /// On error the model keeps the previously working device.
    fn set_sound_card_device(&mut self, index: usize) -> Result<(), SoundCardError>;

    /// Channel names of the current device for one direction
    fn sound_card_channel_names(&self, direction: ChannelDirection) -> Vec<String>;

    /// Number of channels of the current device for one direction
    fn sound_card_num_channels(&self, direction: ChannelDirection) -> usize {
        self.sound_card_channel_names(direction).len()
    }

    /// Device channel mapped to a slot
    fn sound_card_channel(&self, slot: ChannelSlot) -> usize;

    /// Map a device channel to a slot
    fn set_sound_card_channel(&mut self, slot: ChannelSlot, channel: usize);

    /// Block size actually used by the sound card, in mono samples
    fn sound_card_actual_buffer_size(&self) -> u32;

    /// Whether the sound card can run with the given buffer delay preset
    fn frame_size_factor_supported(&self, factor: FrameSizeFactor) -> bool;

    /// Request a buffer delay preset
    fn set_preferred_frame_size_factor(&mut self, factor: FrameSizeFactor);

    /// Whether a native driver setup panel exists on this platform
    fn has_driver_setup(&self) -> bool {
        false
    }

    /// Open the native driver setup panel
    fn open_driver_setup(&mut self) {}

    // Audio -----------------------------------------------------------------

    fn audio_channels(&self) -> AudioChannels;

    fn set_audio_channels(&mut self, channels: AudioChannels);

    fn audio_quality(&self) -> AudioQuality;

    fn set_audio_quality(&mut self, quality: AudioQuality);

    /// Whether small network buffers (64-sample codec frames) are allowed
    fn enable_opus64(&self) -> bool;

    fn set_enable_opus64(&mut self, enabled: bool);

    // Server list -----------------------------------------------------------

    fn central_server_address_type(&self) -> CentralServerAddressType;

    fn set_central_server_address_type(&mut self, address_type: CentralServerAddressType);

    /// User-entered central server address
    fn central_server_address(&self) -> String;

    fn set_central_server_address(&mut self, address: &str);

    // Interface preferences -------------------------------------------------

    fn gui_design(&self) -> GuiDesign;

    fn set_gui_design(&mut self, design: GuiDesign);

    fn display_channel_levels(&self) -> bool;

    fn set_display_channel_levels(&mut self, enabled: bool);

    /// Fader level in percent applied to newly connected clients
    fn new_client_fader_level(&self) -> u32;

    fn set_new_client_fader_level(&mut self, level: u32);

    // Status ----------------------------------------------------------------

    /// Whether the client is connected and streaming
    fn is_running(&self) -> bool;

    /// Current upload rate in kbps
    fn upload_rate_kbps(&self) -> u32;

    /// Last measured ping time, if any
    fn ping_time_ms(&self) -> Option<u32>;

    /// End-to-end delay estimate for the given ping time
    fn estimated_overall_delay_ms(&self, ping_time_ms: u32) -> u32;
}
