use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use indexmap::indexmap;

use super::alias::AliasMap;
use super::build_config::BuildConfig;
use super::build_config::PluginDescriptor;

pub struct ConfigFixture {
  pub build_config: BuildConfig,
  pub skiff_rc: String,
  pub path: PathBuf,
}

pub struct PartialConfigFixture {
  pub skiff_rc: String,
  pub path: PathBuf,
}

pub struct ExtendedConfigFixture {
  pub base_config: PartialConfigFixture,
  pub extended_config: PartialConfigFixture,
  pub build_config: BuildConfig,
}

pub fn config(project_root: &Path) -> (String, ConfigFixture) {
  (
    String::from("./custom/.skiffrc"),
    default_config(
      &Arc::new(project_root.join("custom").join(".skiffrc")),
      project_root,
    ),
  )
}

pub fn fallback_config(project_root: &Path) -> (String, ConfigFixture) {
  (
    String::from("./fallback/.skiffrc"),
    default_config(
      &Arc::new(project_root.join("fallback").join(".skiffrc")),
      project_root,
    ),
  )
}

pub fn default_config(resolve_from: &Arc<PathBuf>, project_root: &Path) -> ConfigFixture {
  ConfigFixture {
    build_config: BuildConfig {
      plugins: vec![PluginDescriptor {
        package_name: String::from("skiff-plugin-vue"),
        resolve_from: Arc::clone(resolve_from),
      }],
      aliases: AliasMap::new(indexmap! {
        String::from("@") => project_root.join("src"),
        String::from("~") => project_root.join("node_modules"),
      }),
    },
    skiff_rc: String::from(
      r#"
        {
          "plugins": ["skiff-plugin-vue"],
          "resolve": {
            "alias": {
              "@": "/src",
              "~": "/node_modules"
            }
          }
        }
      "#,
    ),
    path: PathBuf::from(resolve_from.as_os_str()),
  }
}

fn extended_config_from(
  project_root: &Path,
  base_resolve_from: Arc<PathBuf>,
  extends_specifier: &str,
) -> ExtendedConfigFixture {
  let extended_resolve_from = Arc::new(project_root.join("configs").join(".skiffrc"));
  let extended_config = default_config(&extended_resolve_from, project_root);

  ExtendedConfigFixture {
    build_config: BuildConfig {
      plugins: vec![
        PluginDescriptor {
          package_name: String::from("skiff-plugin-vue"),
          resolve_from: Arc::clone(&extended_resolve_from),
        },
        PluginDescriptor {
          package_name: String::from("@scope/skiff-metrics-plugin"),
          resolve_from: Arc::clone(&base_resolve_from),
        },
      ],
      aliases: AliasMap::new(indexmap! {
        String::from("@") => project_root.join("src"),
        String::from("~") => project_root.join("node_modules"),
        String::from("#") => project_root.join("packages"),
      }),
    },
    base_config: PartialConfigFixture {
      path: PathBuf::from(base_resolve_from.as_os_str()),
      skiff_rc: format!(
        r##"
          {{
            "extends": "{}",
            "plugins": ["...", "@scope/skiff-metrics-plugin"],
            "resolve": {{
              "alias": {{
                "#": "/packages"
              }}
            }}
          }}
        "##,
        extends_specifier
      ),
    },
    extended_config: PartialConfigFixture {
      path: extended_config.path,
      skiff_rc: extended_config.skiff_rc,
    },
  }
}

pub fn default_extended_config(project_root: &Path) -> ExtendedConfigFixture {
  let base_resolve_from = Arc::new(project_root.join(".skiffrc"));

  extended_config_from(project_root, base_resolve_from, "./configs/.skiffrc")
}

pub fn extended_config(project_root: &Path) -> (String, ExtendedConfigFixture) {
  let base_resolve_from = Arc::new(project_root.join("custom").join(".skiffrc"));

  (
    String::from("./custom/.skiffrc"),
    extended_config_from(project_root, base_resolve_from, "../configs/.skiffrc"),
  )
}
