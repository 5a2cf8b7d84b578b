use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Duplicate alias token {0}")]
  DuplicateAliasToken(String),
  #[error("Invalid base directory {}", .0.display())]
  InvalidBaseDirectory(PathBuf),
  #[error("{0}")]
  InvalidConfig(String),
  #[error("Unable to locate .skiffrc from {}", .0.display())]
  MissingSkiffRc(PathBuf),
  #[error("Failed to parse {}", path.display())]
  ParseFailure {
    path: PathBuf,
    #[source]
    source: serde_json5::Error,
  },
  #[error("Failed to read {}", path.display())]
  ReadConfigFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("Failed to resolve {config_type} {specifier} from {}", from.display())]
  UnresolvedConfig {
    config_type: String,
    from: PathBuf,
    specifier: String,
  },
}
