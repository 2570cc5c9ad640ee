//! # jamlink UI
//!
//! Toolkit-neutral client settings dialog. The dialog mirrors the client
//! model into plain widget states and relays user edits back to the model;
//! a toolkit frontend only has to render [`SettingsSnapshot`] and forward
//! widget events to the `on_*` handlers.

pub mod presenter;
pub mod settings_dialog;
pub mod status;
pub mod timer;
pub mod widgets;

pub use presenter::{LogPresenter, MessagePresenter, RfdPresenter};
pub use settings_dialog::{
    ClientSettingsDialog, DialogOptions, RunState, SettingsChange, SettingsSnapshot,
};
pub use status::StatusDisplay;
pub use timer::spawn_status_timer;
pub use widgets::{
    ButtonState, CheckBoxState, ComboBoxState, LabelState, LedState, LineEditState, RadioButtonState,
    SliderState,
};
