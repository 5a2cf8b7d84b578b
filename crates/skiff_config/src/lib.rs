pub mod alias;
pub mod build_config;
pub mod config_error;
pub mod partial_build_config;
pub mod skiff_rc;
#[cfg(test)]
mod skiff_config_fixtures;
pub mod skiff_rc_config_loader;

pub use alias::AliasMap;
pub use build_config::BuildConfig;
pub use build_config::PluginDescriptor;
pub use partial_build_config::PartialBuildConfig;
