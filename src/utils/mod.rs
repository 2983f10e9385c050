// Utility modules

pub mod date;
pub mod text;
