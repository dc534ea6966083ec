//! longhand-core — the long-multiplication drill engine.
//!
//! This crate defines the fundamental data model and grading logic that the
//! entire longhand system builds on: problem generation, the textbook
//! partial-product decomposition, the editable digit grid, the verifier,
//! and the session trial tracker.

pub mod decompose;
pub mod error;
pub mod generator;
pub mod grid;
pub mod model;
pub mod report;
pub mod session;
pub mod traits;
pub mod verify;
