//! Frame refreshes from the client model.
//!
//! None of these write to the model; they only copy model state into the
//! widget states.

use super::*;
use jamlink_core::constants::DEFAULT_SERVER_NAME;
use jamlink_core::{ChannelDirection, DelayLight};

impl<C: ClientModel> ClientSettingsDialog<C> {
    /// Refresh the jitter-buffer sliders, size labels, and auto check box.
    /// The manual controls are disabled while auto sizing is on.
    pub fn update_jitter_buffer_frame(&mut self) {
        let client = self.client.borrow();
        let local = client.sock_buf_num_frames();
        let server = client.server_sock_buf_num_frames();
        let auto = client.auto_sock_buf_size();

        let frame = &mut self.view.jitter_buffer;
        frame.local_slider.set_value(local);
        frame.local_size.text = format!("Size: {}", local);
        frame.server_slider.set_value(server);
        frame.server_size.text = format!("Size: {}", server);

        frame.auto.checked = auto;
        frame.local_slider.enabled = !auto;
        frame.local_size.enabled = !auto;
        frame.local_caption.enabled = !auto;
        frame.server_slider.enabled = !auto;
        frame.server_size.enabled = !auto;
        frame.server_caption.enabled = !auto;
    }

    /// Refill the device list and select the device in use
    pub(crate) fn update_sound_card_device_list(&mut self) {
        let client = self.client.borrow();
        let device = &mut self.view.sound_card.device;
        device.set_items(client.sound_card_device_names());
        device.set_current_index(client.sound_card_device());
    }

    /// Refresh the buffer delay radio buttons and the driver setup button.
    ///
    /// A radio button is checked only if its block size is the one actually
    /// in use, so all three may be unchecked; the group title then shows the
    /// actual block size instead.
    pub fn update_sound_card_frame(&mut self) {
        let client = self.client.borrow();
        let actual = client.sound_card_actual_buffer_size();
        let in_use = FrameSizeFactor::from_buffer_size(actual);

        let frame = &mut self.view.sound_card;
        for factor in FrameSizeFactor::ALL {
            let radio = frame.buffer_delay.radio_mut(factor);
            radio.checked = in_use == Some(factor);
            radio.enabled = client.frame_size_factor_supported(factor);
        }

        frame.buffer_delay.title = match in_use {
            Some(_) => "Buffer Delay".to_string(),
            None => format!("Buffer Delay: {}", buffer_delay_text(actual, "")),
        };

        frame.driver_setup.visible = client.has_driver_setup();
    }

    /// Refresh the channel mapping combo boxes.
    ///
    /// The frame is only shown where the platform supports channel mapping
    /// and the device has more than two channels in some direction.
    pub fn update_sound_channel_selection_frame(&mut self) {
        let client = self.client.borrow();
        let frame = &mut self.view.channel_selection;

        let num_in = client.sound_card_num_channels(ChannelDirection::Input);
        let num_out = client.sound_card_num_channels(ChannelDirection::Output);

        if !self.options.channel_selection_supported || (num_in <= 2 && num_out <= 2) {
            frame.visible = false;
            return;
        }
        frame.visible = true;

        for direction in [ChannelDirection::Input, ChannelDirection::Output] {
            let names = client.sound_card_channel_names(direction);
            for slot in ChannelSlot::ALL
                .into_iter()
                .filter(|s| s.direction() == direction)
            {
                let combo = frame.combo_mut(slot);
                combo.set_items(names.clone());
                if !names.is_empty() {
                    combo.set_current_index(client.sound_card_channel(slot));
                }
            }
        }
    }

    /// Refresh the central server field from the address type.
    ///
    /// A manual address is editable; a built-in address shows its name and
    /// is read-only.
    pub fn update_central_server_dependency(&mut self) {
        let client = self.client.borrow();
        let address_type = client.central_server_address_type();

        self.view
            .central_server_address_type
            .set_current_index(address_type.index());

        let edit = &mut self.view.central_server_address;
        if address_type.is_manual() {
            edit.text = client.central_server_address();
            edit.enabled = true;
        } else {
            edit.text = DEFAULT_SERVER_NAME.to_string();
            edit.enabled = false;
        }
    }

    /// Refresh the combo boxes, check boxes, and the fader level field
    pub(crate) fn update_preferences(&mut self) {
        let client = self.client.borrow();
        let view = &mut self.view;

        view.gui_design_fancy.checked = client.gui_design().is_fancy();
        view.display_channel_levels.checked = client.display_channel_levels();
        view.enable_opus64.checked = client.enable_opus64();
        view.audio_channels
            .set_current_index(client.audio_channels().index());
        view.audio_quality
            .set_current_index(client.audio_quality().index());
        view.new_client_level.text = client.new_client_fader_level().to_string();
    }

    /// Refresh the status block from the running flag, upload rate, and ping.
    ///
    /// While running, ping and delay are only rewritten when the model has a
    /// measurement; a result pushed through `set_ping_time_result` otherwise
    /// stays on screen.
    pub fn update_status(&mut self) {
        let client = self.client.borrow();
        let run_state = RunState::from(client.is_running());

        if run_state != self.view.run_state {
            debug!("Client run state changed to {:?}", run_state);
            self.view.run_state = run_state;
        }

        let status = &mut self.view.status;
        match run_state {
            RunState::NotRunning => status.clear(),
            RunState::Running => {
                status.set_upload_rate(client.upload_rate_kbps());
                // without a model ping, keep the last pushed result
                if let Some(ping) = client.ping_time_ms() {
                    let delay = client.estimated_overall_delay_ms(ping);
                    status.set_ping_result(ping, delay, DelayLight::for_overall_delay(delay));
                }
            }
        }
    }

    /// Refresh everything that can change without user input: jitter-buffer
    /// sizes (auto sizing), the sound card frame, and the status block
    pub fn update_display(&mut self) {
        self.update_jitter_buffer_frame();
        self.update_sound_card_frame();
        self.update_status();
    }
}
