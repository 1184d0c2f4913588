//! Everything that moves a grid in or out of memory
//!
//! Parsing puzzle text, text and pixel rendering, PNG export, the CLI and the
//! shared error type.

/// Command-line interface and logging setup
pub mod cli;
/// Rendering, parsing and export defaults
pub mod configuration;
/// Error types
pub mod error;
/// Raster canvas and PNG export
pub mod image;
/// Puzzle input parsing
pub mod parse;
/// Drawing side channel
pub mod render;
/// Text serialization
pub mod text;
