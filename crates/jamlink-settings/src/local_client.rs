//! Local client model
//!
//! A [`ClientModel`] backed by [`ClientSettings`] and an inventory of sound
//! card devices. It owns the values the settings dialog mirrors, applies the
//! same clamping and rejection rules as the audio engine, and exposes the
//! runtime status (running flag, ping, upload rate) the status block shows.

use crate::config::ClientSettings;
use jamlink_core::constants::{
    MAX_NET_BUF_SIZE_NUM_BL, MAX_NEW_CLIENT_LEVEL, MIN_NET_BUF_SIZE_NUM_BL,
    SYSTEM_FRAME_SIZE_SAMPLES, SYSTEM_SAMPLE_RATE_HZ,
};
use jamlink_core::{
    AudioChannels, AudioQuality, CentralServerAddressType, ChannelDirection, ChannelSlot,
    ClientModel, FrameSizeFactor, GuiDesign, SoundCardError,
};
use tracing::{debug, info, warn};

/// IP and UDP header bytes added to every audio packet
const PACKET_HEADER_BYTES: u32 = 28;

/// Share of the jitter-buffer length that adds to the delay estimate
const JITTER_BUFFER_DELAY_WEIGHT: f64 = 0.7;

/// A sound card device as reported by the audio backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCardDevice {
    pub name: String,
    pub input_channels: Vec<String>,
    pub output_channels: Vec<String>,
    /// Buffer delay presets the driver accepts
    pub supported_factors: Vec<FrameSizeFactor>,
    /// Block size the driver falls back to when no preset is supported
    pub native_buffer_size: u32,
    /// Set when the driver cannot be opened
    pub open_error: Option<String>,
}

impl SoundCardDevice {
    /// Stereo device supporting every buffer delay preset
    pub fn stereo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_channels: vec!["Left".to_string(), "Right".to_string()],
            output_channels: vec!["Left".to_string(), "Right".to_string()],
            supported_factors: FrameSizeFactor::ALL.to_vec(),
            native_buffer_size: FrameSizeFactor::Default.buffer_size(),
            open_error: None,
        }
    }

    /// Device with numbered input and output channels
    pub fn multichannel(name: impl Into<String>, inputs: usize, outputs: usize) -> Self {
        Self {
            input_channels: (1..=inputs).map(|i| format!("Input {}", i)).collect(),
            output_channels: (1..=outputs).map(|i| format!("Output {}", i)).collect(),
            ..Self::stereo(name)
        }
    }

    pub fn with_supported_factors(mut self, factors: &[FrameSizeFactor]) -> Self {
        self.supported_factors = factors.to_vec();
        self
    }

    pub fn with_native_buffer_size(mut self, size: u32) -> Self {
        self.native_buffer_size = size;
        self
    }

    pub fn with_open_error(mut self, reason: impl Into<String>) -> Self {
        self.open_error = Some(reason.into());
        self
    }

    fn channels(&self, direction: ChannelDirection) -> &[String] {
        match direction {
            ChannelDirection::Input => &self.input_channels,
            ChannelDirection::Output => &self.output_channels,
        }
    }
}

/// Client model that owns persisted settings and runtime status
#[derive(Debug, Clone)]
pub struct LocalClient {
    settings: ClientSettings,
    devices: Vec<SoundCardDevice>,
    current_device: usize,
    actual_buffer_size: u32,
    running: bool,
    ping_time_ms: Option<u32>,
    driver_setup_requests: u32,
}

impl LocalClient {
    /// Create a client from persisted settings and the available devices.
    ///
    /// The persisted device is selected by name; if it is missing or fails to
    /// open, the first device that opens is used.
    pub fn new(settings: ClientSettings, devices: Vec<SoundCardDevice>) -> Self {
        let mut client = Self {
            settings,
            devices,
            current_device: 0,
            actual_buffer_size: FrameSizeFactor::Default.buffer_size(),
            running: false,
            ping_time_ms: None,
            driver_setup_requests: 0,
        };

        let saved = client
            .settings
            .sound_card
            .device_name
            .as_ref()
            .and_then(|name| client.devices.iter().position(|d| &d.name == name));

        let candidates: Vec<usize> = saved
            .into_iter()
            .chain(0..client.devices.len())
            .collect();

        for index in candidates {
            match client.set_sound_card_device(index) {
                Ok(()) => break,
                Err(e) => warn!("Skipping sound card {}: {}", index, e),
            }
        }

        client.clamp_jitter_buffers();
        client
    }

    /// Persisted settings as currently applied
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Devices known to the client
    pub fn devices(&self) -> &[SoundCardDevice] {
        &self.devices
    }

    /// Mark the client as connected or disconnected
    pub fn set_running(&mut self, running: bool) {
        if self.running != running {
            info!("Client {}", if running { "started" } else { "stopped" });
        }
        self.running = running;
        if !running {
            self.ping_time_ms = None;
        }
    }

    /// Record a ping measurement
    pub fn set_ping_time_ms(&mut self, ping_ms: u32) {
        self.ping_time_ms = Some(ping_ms);
    }

    /// How often the native driver setup panel was requested
    pub fn driver_setup_requests(&self) -> u32 {
        self.driver_setup_requests
    }

    fn device(&self) -> Option<&SoundCardDevice> {
        self.devices.get(self.current_device)
    }

    fn clamp_jitter_buffers(&mut self) {
        let jb = &mut self.settings.jitter_buffer;
        jb.local_frames = jb
            .local_frames
            .clamp(MIN_NET_BUF_SIZE_NUM_BL, MAX_NET_BUF_SIZE_NUM_BL);
        jb.server_frames = jb
            .server_frames
            .clamp(MIN_NET_BUF_SIZE_NUM_BL, MAX_NET_BUF_SIZE_NUM_BL);
    }

    fn clamp_channel_mapping(&mut self) {
        let counts = match self.device() {
            Some(device) => (device.input_channels.len(), device.output_channels.len()),
            None => (0, 0),
        };

        for slot in ChannelSlot::ALL {
            let count = match slot.direction() {
                ChannelDirection::Input => counts.0,
                ChannelDirection::Output => counts.1,
            };
            let channel = self.settings.sound_card.channel_mut(slot);
            *channel = (*channel).min(count.saturating_sub(1));
        }
    }

    fn update_actual_buffer_size(&mut self) {
        let preferred = self.settings.sound_card.preferred_frame_size_factor;
        self.actual_buffer_size = match self.device() {
            Some(device) if device.supported_factors.contains(&preferred) => {
                preferred.buffer_size()
            }
            Some(device) => device
                .supported_factors
                .first()
                .map(|f| f.buffer_size())
                .unwrap_or(device.native_buffer_size),
            None => preferred.buffer_size(),
        };
        debug!("Sound card buffer size is {} samples", self.actual_buffer_size);
    }

    /// Codec frame size in samples for the current settings
    fn codec_frame_size(&self) -> u32 {
        if self.settings.audio.enable_opus64
            && self.actual_buffer_size == FrameSizeFactor::Preferred.buffer_size()
        {
            SYSTEM_FRAME_SIZE_SAMPLES
        } else {
            2 * SYSTEM_FRAME_SIZE_SAMPLES
        }
    }

    /// Coded bytes per 128-sample frame
    fn codec_frame_bytes(&self) -> u32 {
        let stereo = self.settings.audio.channels != AudioChannels::Mono;
        match (self.settings.audio.quality, stereo) {
            (AudioQuality::Low, false) => 12,
            (AudioQuality::Normal, false) => 22,
            (AudioQuality::High, false) => 36,
            (AudioQuality::Low, true) => 24,
            (AudioQuality::Normal, true) => 35,
            (AudioQuality::High, true) => 73,
        }
    }
}

impl ClientModel for LocalClient {
    fn sock_buf_num_frames(&self) -> u32 {
        self.settings.jitter_buffer.local_frames
    }

    fn set_sock_buf_num_frames(&mut self, frames: u32) {
        self.settings.jitter_buffer.local_frames = frames;
        self.clamp_jitter_buffers();
    }

    fn server_sock_buf_num_frames(&self) -> u32 {
        self.settings.jitter_buffer.server_frames
    }

    fn set_server_sock_buf_num_frames(&mut self, frames: u32) {
        self.settings.jitter_buffer.server_frames = frames;
        self.clamp_jitter_buffers();
    }

    fn auto_sock_buf_size(&self) -> bool {
        self.settings.jitter_buffer.auto
    }

    fn set_auto_sock_buf_size(&mut self, enabled: bool) {
        self.settings.jitter_buffer.auto = enabled;
    }

    fn sound_card_device_names(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.name.clone()).collect()
    }

    fn sound_card_device(&self) -> usize {
        self.current_device
    }

    fn set_sound_card_device(&mut self, index: usize) -> Result<(), SoundCardError> {
        let device = self.devices.get(index).ok_or(SoundCardError::InvalidDevice {
            index,
            count: self.devices.len(),
        })?;

        if let Some(reason) = &device.open_error {
            return Err(SoundCardError::DriverFailure {
                name: device.name.clone(),
                reason: reason.clone(),
            });
        }

        info!("Using sound card '{}'", device.name);
        self.settings.sound_card.device_name = Some(device.name.clone());
        self.current_device = index;
        self.clamp_channel_mapping();
        self.update_actual_buffer_size();
        Ok(())
    }

    fn sound_card_channel_names(&self, direction: ChannelDirection) -> Vec<String> {
        self.device()
            .map(|d| d.channels(direction).to_vec())
            .unwrap_or_default()
    }

    fn sound_card_channel(&self, slot: ChannelSlot) -> usize {
        self.settings.sound_card.channel(slot)
    }

    fn set_sound_card_channel(&mut self, slot: ChannelSlot, channel: usize) {
        *self.settings.sound_card.channel_mut(slot) = channel;
        self.clamp_channel_mapping();
    }

    fn sound_card_actual_buffer_size(&self) -> u32 {
        self.actual_buffer_size
    }

    fn frame_size_factor_supported(&self, factor: FrameSizeFactor) -> bool {
        self.device()
            .is_some_and(|d| d.supported_factors.contains(&factor))
    }

    fn set_preferred_frame_size_factor(&mut self, factor: FrameSizeFactor) {
        self.settings.sound_card.preferred_frame_size_factor = factor;
        self.update_actual_buffer_size();
    }

    fn has_driver_setup(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn open_driver_setup(&mut self) {
        if self.has_driver_setup() {
            self.driver_setup_requests += 1;
            info!("Opening driver setup");
        }
    }

    fn audio_channels(&self) -> AudioChannels {
        self.settings.audio.channels
    }

    fn set_audio_channels(&mut self, channels: AudioChannels) {
        self.settings.audio.channels = channels;
    }

    fn audio_quality(&self) -> AudioQuality {
        self.settings.audio.quality
    }

    fn set_audio_quality(&mut self, quality: AudioQuality) {
        self.settings.audio.quality = quality;
    }

    fn enable_opus64(&self) -> bool {
        self.settings.audio.enable_opus64
    }

    fn set_enable_opus64(&mut self, enabled: bool) {
        self.settings.audio.enable_opus64 = enabled;
    }

    fn central_server_address_type(&self) -> CentralServerAddressType {
        self.settings.server_list.address_type
    }

    fn set_central_server_address_type(&mut self, address_type: CentralServerAddressType) {
        self.settings.server_list.address_type = address_type;
    }

    fn central_server_address(&self) -> String {
        self.settings.server_list.manual_address.clone()
    }

    fn set_central_server_address(&mut self, address: &str) {
        self.settings.server_list.manual_address = address.trim().to_string();
    }

    fn gui_design(&self) -> GuiDesign {
        self.settings.ui.gui_design
    }

    fn set_gui_design(&mut self, design: GuiDesign) {
        self.settings.ui.gui_design = design;
    }

    fn display_channel_levels(&self) -> bool {
        self.settings.ui.display_channel_levels
    }

    fn set_display_channel_levels(&mut self, enabled: bool) {
        self.settings.ui.display_channel_levels = enabled;
    }

    fn new_client_fader_level(&self) -> u32 {
        self.settings.ui.new_client_fader_level
    }

    fn set_new_client_fader_level(&mut self, level: u32) {
        self.settings.ui.new_client_fader_level = level.min(MAX_NEW_CLIENT_LEVEL);
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn upload_rate_kbps(&self) -> u32 {
        if !self.running {
            return 0;
        }
        let frame_size = self.codec_frame_size();
        let frame_bytes = if frame_size == SYSTEM_FRAME_SIZE_SAMPLES {
            self.codec_frame_bytes().div_ceil(2)
        } else {
            self.codec_frame_bytes()
        };
        let packets_per_second = SYSTEM_SAMPLE_RATE_HZ / frame_size;
        (frame_bytes + PACKET_HEADER_BYTES) * 8 * packets_per_second / 1000
    }

    fn ping_time_ms(&self) -> Option<u32> {
        self.ping_time_ms
    }

    fn estimated_overall_delay_ms(&self, ping_time_ms: u32) -> u32 {
        let ms_per_sample = 1000.0 / f64::from(SYSTEM_SAMPLE_RATE_HZ);
        let block_ms = f64::from(self.codec_frame_size()) * ms_per_sample;
        let buffer_ms = f64::from(self.actual_buffer_size) * ms_per_sample;
        let jb = &self.settings.jitter_buffer;

        let jitter_buffer_ms =
            block_ms * f64::from(jb.local_frames + jb.server_frames) * JITTER_BUFFER_DELAY_WEIGHT;
        // two periods on input, one on output
        let sound_card_ms = 3.0 * buffer_ms;
        let packet_fill_ms = buffer_ms;
        let codec_ms = block_ms / 2.0;

        (jitter_buffer_ms + sound_card_ms + packet_fill_ms + codec_ms + f64::from(ping_time_ms))
            .round() as u32
    }
}
