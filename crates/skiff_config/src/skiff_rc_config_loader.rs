use std::path::Path;
use std::path::PathBuf;

use pathdiff::diff_paths;
use skiff_core::path::join_normalized;
use skiff_core::path::normalize_path;
use skiff_filesystem::search::find_ancestor_file;
use skiff_filesystem::FileSystemRef;

use super::build_config::BuildConfig;
use super::build_config::PluginDescriptor;
use super::config_error::ConfigError;
use super::partial_build_config::PartialBuildConfig;
use super::skiff_rc::Extends;
use super::skiff_rc::SkiffRcFile;

#[derive(Default)]
pub struct LoadConfigOptions<'a> {
  /// A list of additional plugins that will be appended to the plugins config
  pub additional_plugins: Vec<PluginDescriptor>,
  /// A file path that will be used to load the config from
  pub config: Option<&'a str>,
  /// A file path that will be used to load the config from when no other
  /// .skiffrc can be found
  pub fallback_config: Option<&'a str>,
}

/// Loads and validates .skiffrc config
pub struct SkiffRcConfigLoader {
  fs: FileSystemRef,
}

impl SkiffRcConfigLoader {
  pub fn new(fs: FileSystemRef) -> Self {
    SkiffRcConfigLoader { fs }
  }

  fn find_config(&self, project_root: &Path, path: &Path) -> Result<PathBuf, ConfigError> {
    let from = path.parent().unwrap_or(path);

    find_ancestor_file(&*self.fs, &[".skiffrc"], from, project_root)
      .ok_or_else(|| ConfigError::MissingSkiffRc(PathBuf::from(from)))
  }

  fn resolve_from(&self, project_root: &Path) -> PathBuf {
    let cwd = self
      .fs
      .cwd()
      .unwrap_or_else(|_| project_root.to_path_buf());

    let relative = diff_paths(&cwd, project_root);
    let is_cwd_inside_project_root =
      relative.is_some_and(|p| !p.starts_with("..") && !p.is_absolute());

    let dir = if is_cwd_inside_project_root {
      &cwd
    } else {
      project_root
    };

    dir.join("index")
  }

  /// Resolves an explicitly requested config path
  ///
  /// Only paths are accepted: absolute, or relative to the directory the
  /// load was anchored at.
  fn resolve_config_path(
    &self,
    config_type: &str,
    specifier: &str,
    from: &Path,
  ) -> Result<PathBuf, ConfigError> {
    let unresolved = || ConfigError::UnresolvedConfig {
      config_type: String::from(config_type),
      from: PathBuf::from(from),
      specifier: String::from(specifier),
    };

    let specifier_path = Path::new(specifier);
    let path = if specifier_path.is_absolute() {
      normalize_path(specifier_path)
    } else if specifier.starts_with('.') {
      join_normalized(from.parent().unwrap_or(from), specifier_path)
    } else {
      return Err(unresolved());
    };

    if !self.fs.is_file(&path) {
      return Err(unresolved());
    }

    Ok(path)
  }

  fn load_config(
    &self,
    path: PathBuf,
    visiting: &mut Vec<PathBuf>,
  ) -> Result<(PartialBuildConfig, Vec<PathBuf>), ConfigError> {
    let raw = self
      .fs
      .read_to_string(&path)
      .map_err(|source| ConfigError::ReadConfigFile {
        path: path.clone(),
        source,
      })?;

    let contents = serde_json5::from_str(&raw).map_err(|source| ConfigError::ParseFailure {
      path: path.clone(),
      source,
    })?;

    self.process_config(SkiffRcFile { contents, path }, visiting)
  }

  fn resolve_extends(
    &self,
    skiff_rc_file: &SkiffRcFile,
    extend: &str,
  ) -> Result<PathBuf, ConfigError> {
    let unresolved = || ConfigError::UnresolvedConfig {
      config_type: String::from("extended config"),
      from: skiff_rc_file.path.clone(),
      specifier: String::from(extend),
    };

    // Bare specifiers would need a package manager; config chains are path-only.
    if !extend.starts_with('.') {
      return Err(unresolved());
    }

    let dir = skiff_rc_file.path.parent().unwrap_or(&skiff_rc_file.path);
    let path = self
      .fs
      .canonicalize(&join_normalized(dir, extend))
      .map_err(|_| unresolved())?;

    if !self.fs.is_file(&path) {
      return Err(unresolved());
    }

    Ok(path)
  }

  /// Processes a .skiffrc file by loading and merging "extends"
  /// configurations into a single PartialBuildConfig
  ///
  /// Merging is applied to all "extends" configurations before they are
  /// merged into the extending config, for a more natural merging order.
  /// Any "..." seen in the plugin list is replaced with the corresponding
  /// plugins from "extends" if present.
  ///
  /// The `visiting` stack holds the chain of config files currently being
  /// extended, so that a cycle fails instead of recursing forever.
  fn process_config(
    &self,
    skiff_rc_file: SkiffRcFile,
    visiting: &mut Vec<PathBuf>,
  ) -> Result<(PartialBuildConfig, Vec<PathBuf>), ConfigError> {
    let mut files = vec![skiff_rc_file.path.clone()];
    let extends = match skiff_rc_file.contents.extends.as_ref() {
      None => Vec::new(),
      Some(Extends::One(ext)) => vec![String::from(ext)],
      Some(Extends::Many(ext)) => ext.to_vec(),
    };

    if extends.is_empty() {
      return Ok((PartialBuildConfig::try_from(&skiff_rc_file)?, files));
    }

    visiting.push(skiff_rc_file.path.clone());

    let mut merged_config: Option<PartialBuildConfig> = None;
    for extend in extends {
      let extended_file_path = self.resolve_extends(&skiff_rc_file, &extend)?;

      if visiting.contains(&extended_file_path) {
        return Err(ConfigError::InvalidConfig(format!(
          "Circular \"extends\" in {}: {} is already being loaded",
          skiff_rc_file.path.display(),
          extended_file_path.display()
        )));
      }

      let (extended_config, mut extended_file_paths) =
        self.load_config(extended_file_path, visiting)?;

      merged_config = match merged_config {
        None => Some(extended_config),
        Some(config) => Some(PartialBuildConfig::merge(config, extended_config)),
      };

      files.append(&mut extended_file_paths);
    }

    visiting.pop();

    let config = PartialBuildConfig::merge(
      PartialBuildConfig::try_from(&skiff_rc_file)?,
      merged_config.unwrap(),
    );

    Ok((config, files))
  }

  /// Finds and loads a .skiffrc file, resolving it against the project root
  ///
  /// By default the nearest .skiffrc ancestor file from the current working
  /// directory will be loaded, unless the config or fallback_config option
  /// are specified. In cases where the current working directory does not
  /// live within the project root, the config will be looked up from the
  /// project root instead.
  ///
  pub fn load(
    &self,
    project_root: &Path,
    options: LoadConfigOptions,
  ) -> Result<(BuildConfig, Vec<PathBuf>), ConfigError> {
    let resolve_from = self.resolve_from(project_root);
    let mut config_path = match options.config {
      Some(config) => self.resolve_config_path("config", config, &resolve_from),
      None => self.find_config(project_root, &resolve_from),
    };

    if config_path.is_err() {
      if let Some(fallback_config) = options.fallback_config {
        config_path = self.resolve_config_path("fallback", fallback_config, &resolve_from);
      }
    }

    let config_path = config_path?;
    tracing::debug!("Loading .skiffrc from {}", config_path.display());

    let (mut skiff_config, files) = self.load_config(config_path, &mut Vec::new())?;

    if !options.additional_plugins.is_empty() {
      skiff_config.plugins.extend(options.additional_plugins);
    }

    let config = BuildConfig::resolve(skiff_config, project_root)?;
    tracing::debug!(
      "Resolved {} plugins and {} aliases",
      config.plugins().len(),
      config.aliases().len()
    );

    Ok((config, files))
  }
}
