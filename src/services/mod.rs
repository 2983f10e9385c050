// Service module exports

pub mod catalog;
pub mod export;
pub mod filter;
pub mod form;
pub mod settings;
pub mod table;
