//! Papyr Core — shared types and errors.
//!
//! This crate provides the foundational types used across all Papyr crates.
//! It has no internal Papyr dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`paper`]: The `Paper` record
//! - [`category`]: Category code catalog and display labels

pub mod category;
pub mod error;
pub mod paper;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use paper::Paper;
