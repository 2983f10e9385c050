// RLM Schedule Library
// Meeting schedule entry, review and export for the Reunião Local Ministerial

pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;

pub use error::{ExportError, ScheduleError};
pub use session::Session;
