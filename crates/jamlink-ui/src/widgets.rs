//! Widget states
//!
//! Plain data mirrors of the controls a settings frontend renders. They carry
//! no behaviour beyond small setters, so two snapshots can be compared to
//! check that a refresh changed nothing.

use jamlink_core::DelayLight;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Slider with an inclusive integer range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SliderState {
    pub min: u32,
    pub max: u32,
    pub value: u32,
    pub enabled: bool,
}

impl SliderState {
    pub fn new(range: RangeInclusive<u32>) -> Self {
        Self {
            min: *range.start(),
            max: *range.end(),
            value: *range.start(),
            enabled: true,
        }
    }

    /// Set the value, clamped to the slider range like a real slider
    pub fn set_value(&mut self, value: u32) {
        self.value = value.clamp(self.min, self.max);
    }
}

/// Text label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelState {
    pub text: String,
    pub enabled: bool,
}

impl LabelState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckBoxState {
    pub checked: bool,
    pub enabled: bool,
}

impl CheckBoxState {
    pub fn new(checked: bool) -> Self {
        Self {
            checked,
            enabled: true,
        }
    }
}

/// Drop-down list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComboBoxState {
    pub items: Vec<String>,
    /// `None` when the list is empty or nothing is selected
    pub current_index: Option<usize>,
    pub enabled: bool,
    pub visible: bool,
}

impl ComboBoxState {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current_index: None,
            enabled: true,
            visible: true,
        }
    }

    /// Replace all items; the selection is cleared
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.current_index = None;
    }

    /// Select an item; out-of-range indices clear the selection
    pub fn set_current_index(&mut self, index: usize) {
        self.current_index = (index < self.items.len()).then_some(index);
    }

    pub fn current_text(&self) -> Option<&str> {
        self.current_index
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }
}

impl Default for ComboBoxState {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-line text input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineEditState {
    pub text: String,
    pub enabled: bool,
}

impl LineEditState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadioButtonState {
    pub text: String,
    pub checked: bool,
    pub enabled: bool,
}

impl RadioButtonState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            checked: false,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    pub text: String,
    pub enabled: bool,
    pub visible: bool,
}

impl ButtonState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            enabled: true,
            visible: true,
        }
    }
}

/// Multi-colour status LED
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LedState {
    pub light: DelayLight,
}

impl LedState {
    pub fn reset(&mut self) {
        self.light = DelayLight::Off;
    }

    pub fn set_light(&mut self, light: DelayLight) {
        self.light = light;
    }
}
