use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Ordered map of alias tokens to the absolute paths they stand for
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
///
/// use indexmap::indexmap;
/// use skiff_config::alias::AliasMap;
///
/// AliasMap::new(indexmap! {
///   String::from("@") => PathBuf::from("/repo/src"),
///   String::from("~") => PathBuf::from("/repo/node_modules"),
/// });
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AliasMap(IndexMap<String, PathBuf>);

impl AliasMap {
  pub fn new(map: IndexMap<String, PathBuf>) -> Self {
    Self(map)
  }

  pub fn get(&self, token: &str) -> Option<&PathBuf> {
    self.0.get(token)
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &PathBuf)> {
    self.0.iter()
  }

  /// Substitutes a matching alias prefix in a module specifier
  ///
  /// A token matches when the specifier equals it, or continues it with a
  /// path separator. Tokens are tried in declaration order and the first
  /// match wins.
  pub fn apply(&self, specifier: &str) -> Option<PathBuf> {
    for (token, target) in self.0.iter() {
      if specifier == token {
        return Some(target.clone());
      }

      if let Some(rest) = specifier
        .strip_prefix(token.as_str())
        .and_then(|rest| rest.strip_prefix('/'))
      {
        return Some(target.join(rest));
      }
    }

    None
  }
}
