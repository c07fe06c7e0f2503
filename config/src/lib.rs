//! # Config Crate
//!
//! Centralized configuration constants for the prompt-to-shape pipeline.
//! Every literal that more than one crate needs (tessellation levels,
//! output layout, preview look, keyword rules) is defined here so the
//! assembler, exporter and dispatcher agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{icosphere_counts, ICOSPHERE_SUBDIVISIONS, DEFAULT_OUTPUT_DIR};
//!
//! // The default sphere has a fixed, deterministic size
//! let (vertices, faces) = icosphere_counts(ICOSPHERE_SUBDIVISIONS);
//! assert_eq!((vertices, faces), (162, 320));
//!
//! assert_eq!(DEFAULT_OUTPUT_DIR, "output");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Runtime State**: Runtime overrides live with the crate that uses them
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
