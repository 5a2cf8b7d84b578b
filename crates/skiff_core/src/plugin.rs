use std::path::PathBuf;

use mockall::automock;

/// Context handed to every plugin by the build runtime
pub struct BuilderContext {
  pub options: BuilderOptions,
  pub logger: PluginLogger,
}

pub struct BuilderOptions {
  pub project_root: PathBuf,
}

#[derive(Default)]
pub struct PluginLogger {}

/// A build-time extension accepted by the bundler
///
/// Plugins run in configuration order and share the same mutable context.
/// The runtime knows nothing about a plugin beyond this capability.
#[automock]
pub trait BuildPlugin: Send + Sync {
  fn apply_to(&self, ctx: &mut BuilderContext) -> Result<(), anyhow::Error>;
}

/// Applies plugins in order, stopping at the first failure
pub fn apply_plugins(
  plugins: &[Box<dyn BuildPlugin>],
  ctx: &mut BuilderContext,
) -> Result<(), anyhow::Error> {
  for plugin in plugins {
    plugin.apply_to(ctx)?;
  }

  Ok(())
}
