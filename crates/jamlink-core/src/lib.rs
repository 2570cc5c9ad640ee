//! # jamlink Core
//!
//! Core types, constants, and the client model boundary for jamlink.
//! The settings view and the persisted client configuration both build on
//! the vocabulary defined here.

pub mod client;
pub mod constants;
pub mod error;
pub mod types;

pub use client::ClientModel;

pub use error::{Error, Result, SoundCardError};

pub use types::{
    shared, shared_vec, AudioChannels, AudioQuality, CentralServerAddressType, ChannelDirection,
    ChannelSlot, DelayLight, FrameSizeFactor, GuiDesign, Shared, SharedVec, UiDataCallback,
};
