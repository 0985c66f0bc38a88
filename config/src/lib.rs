//! # Config Crate
//!
//! Centralized configuration constants for the STEP viewer pipeline.
//! All magic numbers and fixed strings are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{VERTEX_STRIDE, NORMAL_OFFSET};
//!
//! // Locate the normal of the i-th vertex inside an interleaved buffer
//! let i = 4;
//! let start = i * VERTEX_STRIDE + NORMAL_OFFSET;
//! assert_eq!(start, 39);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Wire-Contract Faithful**: Buffer layout values match the worker output
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
