//! Command implementations for uniqfile-cmd

pub mod create;
pub mod suffix;
