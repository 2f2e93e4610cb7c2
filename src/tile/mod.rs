//! Grade tile core: option defaults and grade classification.
//!
//! A raw host configuration is resolved once into a [`TileConfig`], whose
//! palette then colors the letter grade computed for the measure.

pub mod config;
pub mod grade;
pub mod options;
pub mod types;

pub use config::resolve;
pub use grade::classify;
pub use types::{Classification, Palette, RawConfig, TileConfig};
