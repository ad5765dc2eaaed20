//! Configuration module for booth-budget
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BoothPaths;
pub use settings::Settings;
