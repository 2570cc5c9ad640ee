//! Status display formatting
//!
//! Turns the client's runtime figures into the texts shown in the status
//! block of the settings dialog.

use crate::widgets::{LabelState, LedState};
use jamlink_core::constants::{PING_ERROR_THRESHOLD_MS, SYSTEM_SAMPLE_RATE_HZ};
use jamlink_core::DelayLight;
use serde::Serialize;

/// Text shown while no value is available
pub const PLACEHOLDER: &str = "---";

/// Text shown for ping and delay when the ping time is too high
pub const PING_ERROR_TEXT: &str = ">500 ms";

/// Ping and overall delay texts for a measurement
pub fn ping_texts(ping_ms: u32, overall_delay_ms: u32) -> (String, String) {
    if ping_ms > PING_ERROR_THRESHOLD_MS {
        (PING_ERROR_TEXT.to_string(), PING_ERROR_TEXT.to_string())
    } else {
        (format!("{} ms", ping_ms), format!("{} ms", overall_delay_ms))
    }
}

pub fn upload_rate_text(kbps: u32) -> String {
    format!("{} kbps", kbps)
}

/// Describe a sound card block size as its round-trip delay.
///
/// Input and output both buffer one block, so the delay is twice the block
/// duration, e.g. `"5.33 ms (128, preferred)"` for 128 samples with
/// `extra = ", preferred"`.
pub fn buffer_delay_text(buffer_size: u32, extra: &str) -> String {
    let delay_ms = f64::from(buffer_size) * 2.0 * 1000.0 / f64::from(SYSTEM_SAMPLE_RATE_HZ);
    format!("{:.2} ms ({}{})", delay_ms, buffer_size, extra)
}

/// Status block of the settings dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub ping_time: LabelState,
    pub overall_delay: LabelState,
    pub upload_rate: LabelState,
    pub delay_led: LedState,
}

impl StatusDisplay {
    pub fn new() -> Self {
        Self {
            ping_time: LabelState::new(PLACEHOLDER),
            overall_delay: LabelState::new(PLACEHOLDER),
            upload_rate: LabelState::new(PLACEHOLDER),
            delay_led: LedState::default(),
        }
    }

    /// Clear every value to the placeholder
    pub fn clear(&mut self) {
        self.ping_time.text = PLACEHOLDER.to_string();
        self.overall_delay.text = PLACEHOLDER.to_string();
        self.upload_rate.text = PLACEHOLDER.to_string();
        self.delay_led.reset();
    }

    /// Show a ping measurement
    pub fn set_ping_result(&mut self, ping_ms: u32, overall_delay_ms: u32, light: DelayLight) {
        let (ping, delay) = ping_texts(ping_ms, overall_delay_ms);
        self.ping_time.text = ping;
        self.overall_delay.text = delay;
        self.delay_led.set_light(light);
    }

    pub fn set_upload_rate(&mut self, kbps: u32) {
        self.upload_rate.text = upload_rate_text(kbps);
    }

    /// Whether every value shows the placeholder
    pub fn is_cleared(&self) -> bool {
        self.ping_time.text == PLACEHOLDER
            && self.overall_delay.text == PLACEHOLDER
            && self.upload_rate.text == PLACEHOLDER
    }
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self::new()
    }
}
