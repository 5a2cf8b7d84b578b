use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use skiff_core::path::join_normalized;

use super::alias::AliasMap;
use super::config_error::ConfigError;
use super::partial_build_config::PartialBuildConfig;

/// The declarative, opaque form of a build plugin
///
/// The runtime loads the named package from the directory of the config
/// file that declared it; the config layer never inspects it further.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDescriptor {
  pub package_name: String,
  pub resolve_from: Arc<PathBuf>,
}

/// Represents a fully merged and validated .skiffrc config
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct BuildConfig {
  pub(crate) plugins: Vec<PluginDescriptor>,
  pub(crate) aliases: AliasMap,
}

impl BuildConfig {
  /// Resolves a merged config against the project base directory
  ///
  /// Alias fragments are joined onto `base_dir` and normalized. Plugin
  /// order is preserved; "..." spread entries left over from merging are
  /// dropped as a noop. Pure: reads nothing from the environment.
  pub fn resolve(config: PartialBuildConfig, base_dir: &Path) -> Result<Self, ConfigError> {
    if base_dir.as_os_str().is_empty() || !base_dir.is_absolute() {
      return Err(ConfigError::InvalidBaseDirectory(PathBuf::from(base_dir)));
    }

    let spreads = config
      .plugins
      .iter()
      .filter(|plugin| plugin.package_name == "...")
      .count();

    if spreads > 1 {
      return Err(ConfigError::InvalidConfig(format!(
        "Expected at most one \"...\" in the plugin list, found {}",
        spreads
      )));
    }

    let plugins = config
      .plugins
      .into_iter()
      .filter(|plugin| plugin.package_name != "...")
      .collect();

    let mut aliases = IndexMap::new();
    for (token, fragment) in config.aliases {
      aliases.insert(token, join_normalized(base_dir, &fragment));
    }

    Ok(BuildConfig {
      plugins,
      aliases: AliasMap::new(aliases),
    })
  }

  pub fn plugins(&self) -> &Vec<PluginDescriptor> {
    &self.plugins
  }

  pub fn aliases(&self) -> &AliasMap {
    &self.aliases
  }
}
