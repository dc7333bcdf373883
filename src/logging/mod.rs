// file: src/logging/mod.rs
// version: 1.0.0
// guid: 84c2d6f0-5b17-4e93-a8d4-1f7b3c95e620

//! Logging infrastructure

pub mod logger;
