//! Shared primitives for the skiff bundler

/// Pure path joining and normalization
pub mod path;

/// The plugin capability surface recognised by the build runtime
pub mod plugin;
