use std::sync::Arc;

use derive_builder::Builder;
use indexmap::IndexMap;

use super::build_config::PluginDescriptor;
use super::skiff_rc::AliasInput;
use super::skiff_rc::SkiffRcFile;
use crate::config_error::ConfigError;

/// An intermediate representation of the .skiffrc config
///
/// This data structure is used to perform configuration merging across
/// "extends" chains, before the final BuildConfig is resolved.
#[derive(Clone, Debug, Default, Builder, PartialEq)]
#[builder(default)]
pub struct PartialBuildConfig {
  pub plugins: Vec<PluginDescriptor>,
  pub aliases: IndexMap<String, String>,
}

impl TryFrom<&SkiffRcFile> for PartialBuildConfig {
  type Error = ConfigError;

  fn try_from(skiff_rc: &SkiffRcFile) -> Result<PartialBuildConfig, ConfigError> {
    let resolve_from = Arc::new(skiff_rc.path.clone());

    let plugins = skiff_rc
      .contents
      .plugins
      .as_ref()
      .map(|plugins| {
        plugins
          .iter()
          .map(|package_name| PluginDescriptor {
            package_name: String::from(package_name),
            resolve_from: Arc::clone(&resolve_from),
          })
          .collect()
      })
      .unwrap_or(Vec::new());

    let alias = skiff_rc
      .contents
      .resolve
      .as_ref()
      .and_then(|resolve| resolve.alias.as_ref());

    let aliases = match alias {
      None => IndexMap::new(),
      Some(AliasInput::Map(map)) => map.clone(),
      Some(AliasInput::Pairs(pairs)) => {
        let mut aliases = IndexMap::new();
        for (token, fragment) in pairs {
          let previous = aliases.insert(String::from(token), String::from(fragment));
          if previous.is_some() {
            return Err(ConfigError::DuplicateAliasToken(String::from(token)));
          }
        }

        aliases
      }
    };

    Ok(PartialBuildConfig { plugins, aliases })
  }
}

impl PartialBuildConfig {
  fn merge_plugins(
    from_plugins: Vec<PluginDescriptor>,
    extend_plugins: Vec<PluginDescriptor>,
  ) -> Vec<PluginDescriptor> {
    if extend_plugins.is_empty() {
      return from_plugins;
    }

    if from_plugins.is_empty() {
      return extend_plugins;
    }

    let spread_index = from_plugins
      .iter()
      .position(|plugin| plugin.package_name == "...");

    match spread_index {
      None => from_plugins,
      Some(index) => {
        let extend_plugins = extend_plugins.as_slice();

        [
          &from_plugins[..index],
          extend_plugins,
          &from_plugins[(index + 1)..],
        ]
        .concat()
      }
    }
  }

  fn merge_aliases(
    from_aliases: IndexMap<String, String>,
    extend_aliases: IndexMap<String, String>,
  ) -> IndexMap<String, String> {
    if extend_aliases.is_empty() {
      return from_aliases;
    }

    if from_aliases.is_empty() {
      return extend_aliases;
    }

    // Extended entries first so the base chain keeps its declaration order;
    // the extending config wins on token collision.
    let mut merged_aliases = extend_aliases;
    for (token, fragment) in from_aliases {
      merged_aliases.insert(token, fragment);
    }

    merged_aliases
  }

  pub fn merge(from_config: PartialBuildConfig, extend_config: PartialBuildConfig) -> Self {
    PartialBuildConfig {
      plugins: PartialBuildConfig::merge_plugins(from_config.plugins, extend_config.plugins),
      aliases: PartialBuildConfig::merge_aliases(from_config.aliases, extend_config.aliases),
    }
  }
}
