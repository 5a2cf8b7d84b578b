use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Collapses "." and ".." segments without touching the file-system
pub fn normalize_path(path: &Path) -> PathBuf {
  let mut components = path.components().peekable();
  let mut ret = if let Some(c @ Component::Prefix(..)) = components.peek().cloned() {
    components.next();
    PathBuf::from(c.as_os_str())
  } else {
    PathBuf::new()
  };

  for component in components {
    match component {
      Component::Prefix(..) => unreachable!(),
      Component::RootDir => {
        ret.push(component.as_os_str());
      }
      Component::CurDir => {}
      Component::ParentDir => {
        ret.pop();
      }
      Component::Normal(c) => {
        ret.push(c);
      }
    }
  }

  ret
}

/// Joins a path fragment onto a base directory and normalizes the result
///
/// The fragment is always treated as relative to the base, even when it
/// starts with a separator. ".." segments pop the joined path but never
/// escape the file-system root.
pub fn join_normalized<A: AsRef<Path>, B: AsRef<Path>>(base: A, fragment: B) -> PathBuf {
  let mut ret = normalize_path(base.as_ref());

  for component in fragment.as_ref().components() {
    match component {
      Component::Prefix(..) | Component::RootDir => {}
      Component::CurDir => {}
      Component::ParentDir => {
        ret.pop();
      }
      Component::Normal(c) => {
        ret.push(c);
      }
    }
  }

  ret
}
