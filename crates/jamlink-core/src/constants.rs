//! Application-wide constants.
//!
//! Audio timing, jitter-buffer limits, and display defaults shared by the
//! client model and the settings view.

use std::time::Duration;

/// Application name used for window and message box titles.
pub const APP_NAME: &str = "jamlink";

/// Name shown in the central server field when a built-in address is used.
pub const DEFAULT_SERVER_NAME: &str = "Central Server";

/// System sample rate of the audio engine.
pub const SYSTEM_SAMPLE_RATE_HZ: u32 = 48_000;

/// Smallest audio block the engine processes, in mono samples.
pub const SYSTEM_FRAME_SIZE_SAMPLES: u32 = 64;

/// Multiplier of the system frame size for the "preferred" buffer delay.
pub const FRAME_SIZE_FACTOR_PREFERRED: u32 = 1;

/// Multiplier of the system frame size for the "default" buffer delay.
pub const FRAME_SIZE_FACTOR_DEFAULT: u32 = 2;

/// Multiplier of the system frame size for the "safe" buffer delay.
pub const FRAME_SIZE_FACTOR_SAFE: u32 = 4;

/// Minimum jitter-buffer size in network blocks.
pub const MIN_NET_BUF_SIZE_NUM_BL: u32 = 1;

/// Maximum jitter-buffer size in network blocks.
pub const MAX_NET_BUF_SIZE_NUM_BL: u32 = 20;

/// Jitter-buffer size used before the first measurement.
pub const DEF_NET_BUF_SIZE_NUM_BL: u32 = 10;

/// Interval of the status refresh timer.
pub const DISPLAY_UPDATE_TIME: Duration = Duration::from_millis(1000);

/// Ping times above this value are shown as an error instead of a number.
pub const PING_ERROR_THRESHOLD_MS: u32 = 500;

/// Overall delays up to this value light the delay LED green.
pub const DELAY_LIGHT_GREEN_MAX_MS: u32 = 43;

/// Overall delays up to this value light the delay LED yellow.
pub const DELAY_LIGHT_YELLOW_MAX_MS: u32 = 68;

/// Lowest accepted new-client fader level in percent.
pub const MIN_NEW_CLIENT_LEVEL: u32 = 0;

/// Highest accepted new-client fader level in percent.
pub const MAX_NEW_CLIENT_LEVEL: u32 = 100;

/// Fader level applied to newly connected clients unless configured.
pub const DEFAULT_NEW_CLIENT_LEVEL: u32 = 100;
