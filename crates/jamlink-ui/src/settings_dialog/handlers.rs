//! Widget event handlers.
//!
//! Each handler forwards the edit to the client model and then re-reads the
//! affected widgets, so a value the model rejected or clamped is never left
//! on screen.

use super::*;
use jamlink_core::constants::{APP_NAME, MAX_NEW_CLIENT_LEVEL, MIN_NEW_CLIENT_LEVEL};
use jamlink_core::{DelayLight, GuiDesign};
use tracing::{info, warn};

impl<C: ClientModel> ClientSettingsDialog<C> {
    pub fn on_net_buf_value_changed(&mut self, frames: u32) {
        self.client.borrow_mut().set_sock_buf_num_frames(frames);
        self.update_jitter_buffer_frame();
    }

    pub fn on_net_buf_server_value_changed(&mut self, frames: u32) {
        self.client.borrow_mut().set_server_sock_buf_num_frames(frames);
        self.update_jitter_buffer_frame();
    }

    pub fn on_auto_jit_buf_state_changed(&mut self, checked: bool) {
        self.client.borrow_mut().set_auto_sock_buf_size(checked);
        self.update_jitter_buffer_frame();
    }

    /// Switch the sound card.
    ///
    /// A rejected device is reported in a blocking message and the selector
    /// returns to the device the model kept.
    pub fn on_soundcard_activated(&mut self, index: usize) {
        let result = self.client.borrow_mut().set_sound_card_device(index);

        if let Err(e) = result {
            warn!("Sound card {} rejected: {}", index, e);
            let message = format!(
                "The selected audio device could not be used because of the following error: {} \
                 The previous driver will be selected.",
                e
            );
            self.presenter.critical(APP_NAME, &message);
        }

        let current = self.client.borrow().sound_card_device();
        self.view.sound_card.device.set_current_index(current);

        self.update_sound_channel_selection_frame();
        self.update_display();
    }

    pub fn on_channel_activated(&mut self, slot: ChannelSlot, channel: usize) {
        self.client
            .borrow_mut()
            .set_sound_card_channel(slot, channel);
        self.update_sound_channel_selection_frame();
    }

    pub fn on_audio_channels_activated(&mut self, index: usize) {
        match AudioChannels::try_from(index) {
            Ok(channels) => {
                self.client.borrow_mut().set_audio_channels(channels);
                self.notify(SettingsChange::AudioChannels);
            }
            Err(e) => warn!("Ignoring selection: {}", e),
        }
        self.update_preferences();
        // upload rate depends on the channel count
        self.update_display();
    }

    pub fn on_audio_quality_activated(&mut self, index: usize) {
        match AudioQuality::try_from(index) {
            Ok(quality) => self.client.borrow_mut().set_audio_quality(quality),
            Err(e) => warn!("Ignoring selection: {}", e),
        }
        self.update_preferences();
        self.update_display();
    }

    pub fn on_central_server_address_type_activated(&mut self, index: usize) {
        match CentralServerAddressType::try_from(index) {
            Ok(address_type) => self
                .client
                .borrow_mut()
                .set_central_server_address_type(address_type),
            Err(e) => warn!("Ignoring selection: {}", e),
        }
        self.update_central_server_dependency();
    }

    /// Store an edited central server address. Only a manual address can
    /// be edited; edits arriving for a built-in address are dropped.
    pub fn on_central_server_address_editing_finished(&mut self, text: &str) {
        let is_manual = self
            .client
            .borrow()
            .central_server_address_type()
            .is_manual();

        if is_manual {
            self.client.borrow_mut().set_central_server_address(text);
        } else {
            debug!("Central server address is not editable, ignoring edit");
        }
        self.update_central_server_dependency();
    }

    /// Apply an edited new-client fader level. Only whole numbers from 0 to
    /// 100 are accepted; anything else restores the model's value.
    pub fn on_new_client_level_editing_finished(&mut self, text: &str) {
        let level = text
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|l| (MIN_NEW_CLIENT_LEVEL..=MAX_NEW_CLIENT_LEVEL).contains(l));

        match level {
            Some(level) => {
                self.client.borrow_mut().set_new_client_fader_level(level);
                self.notify(SettingsChange::NewClientLevel);
            }
            None => warn!("Invalid new client level '{}'", text),
        }
        self.update_preferences();
    }

    pub fn on_gui_design_fancy_state_changed(&mut self, checked: bool) {
        self.client
            .borrow_mut()
            .set_gui_design(GuiDesign::from_fancy(checked));
        self.notify(SettingsChange::GuiDesign);
        self.update_preferences();
        self.update_display();
    }

    pub fn on_display_channel_levels_state_changed(&mut self, checked: bool) {
        self.client.borrow_mut().set_display_channel_levels(checked);
        self.notify(SettingsChange::DisplayChannelLevels);
        self.update_preferences();
    }

    pub fn on_enable_opus64_state_changed(&mut self, checked: bool) {
        self.client.borrow_mut().set_enable_opus64(checked);
        self.update_preferences();
        self.update_display();
    }

    pub fn on_buffer_delay_clicked(&mut self, factor: FrameSizeFactor) {
        self.client
            .borrow_mut()
            .set_preferred_frame_size_factor(factor);
        self.update_display();
    }

    pub fn on_driver_setup_clicked(&mut self) {
        self.client.borrow_mut().open_driver_setup();
        self.update_display();
    }

    /// Show a ping measurement pushed by the main window.
    ///
    /// Ignored while the client is not running so the status block keeps its
    /// placeholders.
    pub fn set_ping_time_result(&mut self, ping_ms: u32, overall_delay_ms: u32, light: DelayLight) {
        if !self.client.borrow().is_running() {
            return;
        }
        self.view
            .status
            .set_ping_result(ping_ms, overall_delay_ms, light);
    }

    /// Periodic status refresh; never writes to the model
    pub fn on_timer_status(&mut self) {
        self.update_display();
    }

    /// Re-read every widget from the model
    pub fn refresh(&mut self) {
        self.update_jitter_buffer_frame();
        self.update_sound_card_device_list();
        self.update_sound_channel_selection_frame();
        self.update_preferences();
        self.update_central_server_dependency();
        self.update_display();
        info!("Settings dialog refreshed");
    }
}
