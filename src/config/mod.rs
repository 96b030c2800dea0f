//! Configuration management for tasklang.
//!
//! This module handles loading and saving configuration from `~/.tasklang/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig};
