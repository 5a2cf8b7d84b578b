use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Extends {
  One(String),
  Many(Vec<String>),
}

/// Alias declarations as written on disk
///
/// Both a mapping and a list of [token, fragment] pairs are accepted. The
/// pair form can carry duplicate tokens and is validated during conversion
/// to a partial config.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AliasInput {
  Map(IndexMap<String, String>),
  Pairs(Vec<(String, String)>),
}

#[derive(Debug, Default, Deserialize)]
pub struct ResolveOptions {
  pub alias: Option<AliasInput>,
}

/// Deserialized .skiffrc config
#[derive(Debug, Deserialize)]
pub struct SkiffRc {
  pub extends: Option<Extends>,
  pub plugins: Option<Vec<String>>,
  pub resolve: Option<ResolveOptions>,
}

/// Represents the .skiffrc config file
#[derive(Debug)]
pub struct SkiffRcFile {
  pub contents: SkiffRc,
  pub path: PathBuf,
}
