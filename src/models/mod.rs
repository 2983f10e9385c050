// Module exports for models

pub mod catalog;
pub mod category;
pub mod entry;
pub mod region;
pub mod schedule;
pub mod settings;
