//! Client settings dialog.
//!
//! Mirrors the client model into widget states and relays user edits back to
//! it. The model stays the source of truth: every handler forwards the edit
//! and then re-reads the affected widgets from the model, so the displayed
//! state never outlives one event.
//!
//! It's organized into:
//! - Dialog state, construction, and notifications (this file)
//! - Frame refreshes from the model (update.rs)
//! - Widget event handlers (handlers.rs)

mod handlers;
mod update;

use crate::presenter::MessagePresenter;
use crate::status::{buffer_delay_text, StatusDisplay};
use crate::widgets::{
    ButtonState, CheckBoxState, ComboBoxState, LabelState, LineEditState, RadioButtonState,
    SliderState,
};
use jamlink_core::constants::{MAX_NET_BUF_SIZE_NUM_BL, MIN_NET_BUF_SIZE_NUM_BL};
use jamlink_core::{
    shared_vec, AudioChannels, AudioQuality, CentralServerAddressType, ChannelSlot, ClientModel,
    FrameSizeFactor, Shared, SharedVec, UiDataCallback,
};
use serde::Serialize;
use tracing::debug;

/// Platform capabilities that shape the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogOptions {
    /// Whether the sound card channel mapping can be changed
    pub channel_selection_supported: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            channel_selection_supported: cfg!(any(target_os = "windows", target_os = "macos")),
        }
    }
}

/// Connection state as last observed by a refresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RunState {
    Running,
    #[default]
    NotRunning,
}

impl From<bool> for RunState {
    fn from(running: bool) -> Self {
        if running {
            Self::Running
        } else {
            Self::NotRunning
        }
    }
}

/// Settings other windows react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    AudioChannels,
    GuiDesign,
    DisplayChannelLevels,
    NewClientLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JitterBufferFrame {
    pub auto: CheckBoxState,
    pub local_caption: LabelState,
    pub local_slider: SliderState,
    pub local_size: LabelState,
    pub server_caption: LabelState,
    pub server_slider: SliderState,
    pub server_size: LabelState,
}

impl JitterBufferFrame {
    fn new() -> Self {
        let range = MIN_NET_BUF_SIZE_NUM_BL..=MAX_NET_BUF_SIZE_NUM_BL;
        Self {
            auto: CheckBoxState::new(false),
            local_caption: LabelState::new("Local"),
            local_slider: SliderState::new(range.clone()),
            local_size: LabelState::new(""),
            server_caption: LabelState::new("Server"),
            server_slider: SliderState::new(range),
            server_size: LabelState::new(""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BufferDelayGroup {
    pub title: String,
    pub preferred: RadioButtonState,
    pub default: RadioButtonState,
    pub safe: RadioButtonState,
}

impl BufferDelayGroup {
    fn new() -> Self {
        Self {
            title: String::new(),
            preferred: RadioButtonState::new(buffer_delay_text(
                FrameSizeFactor::Preferred.buffer_size(),
                "",
            )),
            default: RadioButtonState::new(buffer_delay_text(
                FrameSizeFactor::Default.buffer_size(),
                ", preferred",
            )),
            safe: RadioButtonState::new(buffer_delay_text(
                FrameSizeFactor::Safe.buffer_size(),
                "",
            )),
        }
    }

    pub fn radio(&self, factor: FrameSizeFactor) -> &RadioButtonState {
        match factor {
            FrameSizeFactor::Preferred => &self.preferred,
            FrameSizeFactor::Default => &self.default,
            FrameSizeFactor::Safe => &self.safe,
        }
    }

    fn radio_mut(&mut self, factor: FrameSizeFactor) -> &mut RadioButtonState {
        match factor {
            FrameSizeFactor::Preferred => &mut self.preferred,
            FrameSizeFactor::Default => &mut self.default,
            FrameSizeFactor::Safe => &mut self.safe,
        }
    }

    /// Preset whose radio button is checked, if any
    pub fn checked(&self) -> Option<FrameSizeFactor> {
        FrameSizeFactor::ALL
            .iter()
            .copied()
            .find(|f| self.radio(*f).checked)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundCardFrame {
    pub device: ComboBoxState,
    pub driver_setup: ButtonState,
    pub buffer_delay: BufferDelayGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSelectionFrame {
    pub visible: bool,
    pub left_input: ComboBoxState,
    pub right_input: ComboBoxState,
    pub left_output: ComboBoxState,
    pub right_output: ComboBoxState,
}

impl ChannelSelectionFrame {
    pub fn combo(&self, slot: ChannelSlot) -> &ComboBoxState {
        match slot {
            ChannelSlot::LeftInput => &self.left_input,
            ChannelSlot::RightInput => &self.right_input,
            ChannelSlot::LeftOutput => &self.left_output,
            ChannelSlot::RightOutput => &self.right_output,
        }
    }

    fn combo_mut(&mut self, slot: ChannelSlot) -> &mut ComboBoxState {
        match slot {
            ChannelSlot::LeftInput => &mut self.left_input,
            ChannelSlot::RightInput => &mut self.right_input,
            ChannelSlot::LeftOutput => &mut self.left_output,
            ChannelSlot::RightOutput => &mut self.right_output,
        }
    }
}

/// Everything the dialog currently displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSnapshot {
    pub jitter_buffer: JitterBufferFrame,
    pub sound_card: SoundCardFrame,
    pub channel_selection: ChannelSelectionFrame,
    pub audio_channels: ComboBoxState,
    pub audio_quality: ComboBoxState,
    pub enable_opus64: CheckBoxState,
    pub gui_design_fancy: CheckBoxState,
    pub display_channel_levels: CheckBoxState,
    pub central_server_address_type: ComboBoxState,
    pub central_server_address: LineEditState,
    pub new_client_level: LineEditState,
    pub status: StatusDisplay,
    pub run_state: RunState,
}

impl SettingsSnapshot {
    fn new() -> Self {
        let mut audio_channels = ComboBoxState::new();
        audio_channels.set_items(AudioChannels::labels());

        let mut audio_quality = ComboBoxState::new();
        audio_quality.set_items(AudioQuality::labels());

        let mut central_server_address_type = ComboBoxState::new();
        central_server_address_type.set_items(CentralServerAddressType::labels());

        Self {
            jitter_buffer: JitterBufferFrame::new(),
            sound_card: SoundCardFrame {
                device: ComboBoxState::new(),
                driver_setup: ButtonState::new("Driver Setup"),
                buffer_delay: BufferDelayGroup::new(),
            },
            channel_selection: ChannelSelectionFrame {
                visible: false,
                left_input: ComboBoxState::new(),
                right_input: ComboBoxState::new(),
                left_output: ComboBoxState::new(),
                right_output: ComboBoxState::new(),
            },
            audio_channels,
            audio_quality,
            enable_opus64: CheckBoxState::default(),
            gui_design_fancy: CheckBoxState::default(),
            display_channel_levels: CheckBoxState::default(),
            central_server_address_type,
            central_server_address: LineEditState::new(""),
            new_client_level: LineEditState::new(""),
            status: StatusDisplay::new(),
            run_state: RunState::NotRunning,
        }
    }
}

/// Settings dialog bound to one client model for its lifetime
pub struct ClientSettingsDialog<C: ClientModel> {
    client: Shared<C>,
    presenter: Box<dyn MessagePresenter>,
    options: DialogOptions,
    view: SettingsSnapshot,
    listeners: SharedVec<UiDataCallback<SettingsChange>>,
}

impl<C: ClientModel> ClientSettingsDialog<C> {
    /// Open the dialog and initialise every widget from the model
    pub fn open(
        client: Shared<C>,
        presenter: Box<dyn MessagePresenter>,
        options: DialogOptions,
    ) -> Self {
        let mut dialog = Self {
            client,
            presenter,
            options,
            view: SettingsSnapshot::new(),
            listeners: shared_vec(),
        };

        dialog.view.status.clear();
        dialog.update_jitter_buffer_frame();
        dialog.update_sound_card_device_list();
        dialog.update_sound_channel_selection_frame();
        dialog.update_preferences();
        dialog.update_central_server_dependency();
        dialog.update_sound_card_frame();

        debug!("Settings dialog opened");
        dialog
    }

    /// Register a callback to be notified when a setting other windows
    /// depend on changes
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(SettingsChange) + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(callback));
    }

    /// Displayed state
    pub fn view(&self) -> &SettingsSnapshot {
        &self.view
    }

    /// Copy of the displayed state
    pub fn snapshot(&self) -> SettingsSnapshot {
        self.view.clone()
    }

    /// Client model the dialog is bound to
    pub fn client(&self) -> &Shared<C> {
        &self.client
    }

    pub fn options(&self) -> DialogOptions {
        self.options
    }

    fn notify(&self, change: SettingsChange) {
        debug!("Settings change: {:?}", change);
        let listeners = self.listeners.borrow();
        for listener in listeners.iter() {
            listener(change);
        }
    }
}
