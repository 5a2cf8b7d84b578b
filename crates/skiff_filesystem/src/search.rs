use std::path::Path;
use std::path::PathBuf;

use crate::FileSystem;

/// Walks up from `from` towards `root`, returning the first of `filenames`
/// that exists
///
/// The search ends once `root` has been visited, and never descends into a
/// node_modules directory.
pub fn find_ancestor_file<P: AsRef<Path>>(
  fs: &dyn FileSystem,
  filenames: &[&str],
  from: P,
  root: P,
) -> Option<PathBuf> {
  for dir in from.as_ref().ancestors() {
    if let Some(dirname) = dir.file_name() {
      if dirname == "node_modules" {
        break;
      }
    }

    for filename in filenames {
      let fullpath = dir.join(filename);
      if fs.is_file(&fullpath) {
        return Some(fullpath);
      }
    }

    if dir == root.as_ref() {
      break;
    }
  }

  None
}
