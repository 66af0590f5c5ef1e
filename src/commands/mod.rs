//! Command implementations for Pygate CLI

pub mod changelog;
pub mod check;
pub mod completions;
pub mod doctor;
pub mod hooks;
pub mod version;
