//! Configuration file loading and saving.

mod service;

pub use service::SettingsService;
