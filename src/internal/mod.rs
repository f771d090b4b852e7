//! Internal layer exports for the backup engine and configuration loading.

pub mod backup;
pub mod config;
