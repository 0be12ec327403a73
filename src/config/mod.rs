//! JSON configuration for the demo binaries.
pub mod finder_demo;
