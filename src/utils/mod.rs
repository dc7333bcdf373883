// file: src/utils/mod.rs
// version: 1.0.0
// guid: f1c7a9e3-6b52-4d18-8f0a-3e9d5c21b784

//! Utility modules

pub mod system;

pub use system::SystemUtils;
