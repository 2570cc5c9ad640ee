#![allow(dead_code)]

use jamlink_core::{
    shared, AudioChannels, AudioQuality, CentralServerAddressType, ChannelDirection, ChannelSlot,
    ClientModel, FrameSizeFactor, GuiDesign, Shared, SoundCardError,
};
use jamlink_ui::{ClientSettingsDialog, DialogOptions, MessagePresenter};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Client model test double with public state and a write counter
#[derive(Debug, Clone)]
pub struct MockClient {
    pub sock_buf: u32,
    pub server_sock_buf: u32,
    pub auto_sock_buf: bool,
    pub devices: Vec<String>,
    pub device: usize,
    pub rejected_devices: HashMap<usize, String>,
    pub input_channels: Vec<String>,
    pub output_channels: Vec<String>,
    pub channels: HashMap<ChannelSlot, usize>,
    pub actual_buffer_size: u32,
    pub supported_factors: Vec<FrameSizeFactor>,
    pub preferred_factor: Option<FrameSizeFactor>,
    pub driver_setup: bool,
    pub driver_setup_opened: u32,
    pub audio_channels: AudioChannels,
    pub audio_quality: AudioQuality,
    pub opus64: bool,
    pub address_type: CentralServerAddressType,
    pub address: String,
    pub gui_design: GuiDesign,
    pub channel_levels: bool,
    pub fader_level: u32,
    pub running: bool,
    pub upload_rate: u32,
    pub ping: Option<u32>,
    /// Added to the ping to form the overall delay
    pub delay_overhead: u32,
    pub writes: u32,
}

impl Default for MockClient {
    fn default() -> Self {
        let mut channels = HashMap::new();
        channels.insert(ChannelSlot::LeftInput, 0);
        channels.insert(ChannelSlot::RightInput, 1);
        channels.insert(ChannelSlot::LeftOutput, 0);
        channels.insert(ChannelSlot::RightOutput, 1);

        Self {
            sock_buf: 5,
            server_sock_buf: 6,
            auto_sock_buf: false,
            devices: vec!["Built-in".to_string(), "USB".to_string(), "ASIO".to_string()],
            device: 0,
            rejected_devices: HashMap::new(),
            input_channels: vec!["In 1".to_string(), "In 2".to_string()],
            output_channels: vec!["Out 1".to_string(), "Out 2".to_string()],
            channels,
            actual_buffer_size: 128,
            supported_factors: FrameSizeFactor::ALL.to_vec(),
            preferred_factor: None,
            driver_setup: false,
            driver_setup_opened: 0,
            audio_channels: AudioChannels::Mono,
            audio_quality: AudioQuality::Normal,
            opus64: false,
            address_type: CentralServerAddressType::Default,
            address: "jam.example.org".to_string(),
            gui_design: GuiDesign::Original,
            channel_levels: true,
            fader_level: 100,
            running: false,
            upload_rate: 0,
            ping: None,
            delay_overhead: 20,
            writes: 0,
        }
    }
}

impl MockClient {
    pub fn running(ping: u32, upload_rate: u32) -> Self {
        Self {
            running: true,
            ping: Some(ping),
            upload_rate,
            ..Self::default()
        }
    }

    pub fn with_channels(mut self, inputs: usize, outputs: usize) -> Self {
        self.input_channels = (1..=inputs).map(|i| format!("In {}", i)).collect();
        self.output_channels = (1..=outputs).map(|i| format!("Out {}", i)).collect();
        self
    }
}

impl ClientModel for MockClient {
    fn sock_buf_num_frames(&self) -> u32 {
        self.sock_buf
    }

    fn set_sock_buf_num_frames(&mut self, frames: u32) {
        self.writes += 1;
        self.sock_buf = frames.clamp(1, 20);
    }

    fn server_sock_buf_num_frames(&self) -> u32 {
        self.server_sock_buf
    }

    fn set_server_sock_buf_num_frames(&mut self, frames: u32) {
        self.writes += 1;
        self.server_sock_buf = frames.clamp(1, 20);
    }

    fn auto_sock_buf_size(&self) -> bool {
        self.auto_sock_buf
    }

    fn set_auto_sock_buf_size(&mut self, enabled: bool) {
        self.writes += 1;
        self.auto_sock_buf = enabled;
    }

    fn sound_card_device_names(&self) -> Vec<String> {
        self.devices.clone()
    }

    fn sound_card_device(&self) -> usize {
        self.device
    }

    fn set_sound_card_device(&mut self, index: usize) -> Result<(), SoundCardError> {
        self.writes += 1;
        if let Some(reason) = self.rejected_devices.get(&index) {
            return Err(SoundCardError::other(reason.clone()));
        }
        if index >= self.devices.len() {
            return Err(SoundCardError::InvalidDevice {
                index,
                count: self.devices.len(),
            });
        }
        self.device = index;
        Ok(())
    }

    fn sound_card_channel_names(&self, direction: ChannelDirection) -> Vec<String> {
        match direction {
            ChannelDirection::Input => self.input_channels.clone(),
            ChannelDirection::Output => self.output_channels.clone(),
        }
    }

    fn sound_card_channel(&self, slot: ChannelSlot) -> usize {
        self.channels.get(&slot).copied().unwrap_or(0)
    }

    fn set_sound_card_channel(&mut self, slot: ChannelSlot, channel: usize) {
        self.writes += 1;
        self.channels.insert(slot, channel);
    }

    fn sound_card_actual_buffer_size(&self) -> u32 {
        self.actual_buffer_size
    }

    fn frame_size_factor_supported(&self, factor: FrameSizeFactor) -> bool {
        self.supported_factors.contains(&factor)
    }

    fn set_preferred_frame_size_factor(&mut self, factor: FrameSizeFactor) {
        self.writes += 1;
        self.preferred_factor = Some(factor);
        if self.supported_factors.contains(&factor) {
            self.actual_buffer_size = factor.buffer_size();
        }
    }

    fn has_driver_setup(&self) -> bool {
        self.driver_setup
    }

    fn open_driver_setup(&mut self) {
        self.driver_setup_opened += 1;
    }

    fn audio_channels(&self) -> AudioChannels {
        self.audio_channels
    }

    fn set_audio_channels(&mut self, channels: AudioChannels) {
        self.writes += 1;
        self.audio_channels = channels;
    }

    fn audio_quality(&self) -> AudioQuality {
        self.audio_quality
    }

    fn set_audio_quality(&mut self, quality: AudioQuality) {
        self.writes += 1;
        self.audio_quality = quality;
    }

    fn enable_opus64(&self) -> bool {
        self.opus64
    }

    fn set_enable_opus64(&mut self, enabled: bool) {
        self.writes += 1;
        self.opus64 = enabled;
    }

    fn central_server_address_type(&self) -> CentralServerAddressType {
        self.address_type
    }

    fn set_central_server_address_type(&mut self, address_type: CentralServerAddressType) {
        self.writes += 1;
        self.address_type = address_type;
    }

    fn central_server_address(&self) -> String {
        self.address.clone()
    }

    fn set_central_server_address(&mut self, address: &str) {
        self.writes += 1;
        self.address = address.to_string();
    }

    fn gui_design(&self) -> GuiDesign {
        self.gui_design
    }

    fn set_gui_design(&mut self, design: GuiDesign) {
        self.writes += 1;
        self.gui_design = design;
    }

    fn display_channel_levels(&self) -> bool {
        self.channel_levels
    }

    fn set_display_channel_levels(&mut self, enabled: bool) {
        self.writes += 1;
        self.channel_levels = enabled;
    }

    fn new_client_fader_level(&self) -> u32 {
        self.fader_level
    }

    fn set_new_client_fader_level(&mut self, level: u32) {
        self.writes += 1;
        self.fader_level = level;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn upload_rate_kbps(&self) -> u32 {
        self.upload_rate
    }

    fn ping_time_ms(&self) -> Option<u32> {
        self.ping
    }

    fn estimated_overall_delay_ms(&self, ping_time_ms: u32) -> u32 {
        ping_time_ms + self.delay_overhead
    }
}

/// Presenter that records every message instead of showing it
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    pub messages: Rc<RefCell<Vec<(String, String)>>>,
}

impl MessagePresenter for RecordingPresenter {
    fn critical(&self, title: &str, message: &str) {
        self.messages
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}

pub struct Harness {
    pub client: Shared<MockClient>,
    pub presenter: RecordingPresenter,
    pub dialog: ClientSettingsDialog<MockClient>,
}

pub fn open(client: MockClient) -> Harness {
    open_with(client, DialogOptions {
        channel_selection_supported: true,
    })
}

pub fn open_with(client: MockClient, options: DialogOptions) -> Harness {
    let client = shared(client);
    let presenter = RecordingPresenter::default();
    let dialog =
        ClientSettingsDialog::open(Rc::clone(&client), Box::new(presenter.clone()), options);
    Harness {
        client,
        presenter,
        dialog,
    }
}
