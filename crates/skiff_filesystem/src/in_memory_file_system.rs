use std::collections::HashMap;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::FileSystem;

#[derive(Debug)]
enum Entry {
  File { contents: String },
  Directory,
}

/// In-memory implementation of the `FileSystem` trait, for testing
#[derive(Debug)]
pub struct InMemoryFileSystem {
  entries: RwLock<HashMap<PathBuf, Entry>>,
  current_working_directory: RwLock<PathBuf>,
}

impl InMemoryFileSystem {
  /// Change the current working directory, used for resolving relative paths
  pub fn set_current_working_directory(&self, cwd: PathBuf) {
    let mut state = self.current_working_directory.write().unwrap();
    *state = cwd;
  }

  pub fn create_directory(&self, path: &Path) {
    let mut entries = self.entries.write().unwrap();
    entries.insert(path.into(), Entry::Directory);
  }

  pub fn write_file(&self, path: &Path, contents: String) {
    let mut entries = self.entries.write().unwrap();
    entries.insert(path.into(), Entry::File { contents });
  }
}

impl Default for InMemoryFileSystem {
  fn default() -> Self {
    Self {
      entries: Default::default(),
      current_working_directory: RwLock::new(PathBuf::from("/")),
    }
  }
}

impl FileSystem for InMemoryFileSystem {
  fn cwd(&self) -> std::io::Result<PathBuf> {
    Ok(self.current_working_directory.read().unwrap().clone())
  }

  fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
    let cwd = self.current_working_directory.read().unwrap();
    let mut result = if path.is_absolute() {
      vec![]
    } else {
      cwd.components().collect()
    };

    for component in path.components() {
      match component {
        Component::Prefix(prefix) => {
          result = vec![Component::Prefix(prefix)];
        }
        Component::RootDir => {
          result = vec![Component::RootDir];
        }
        Component::CurDir => {}
        Component::ParentDir => {
          result.pop();
        }
        Component::Normal(path) => {
          result.push(Component::Normal(path));
        }
      }
    }

    Ok(PathBuf::from_iter(result))
  }

  fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
    let entries = self.entries.read().unwrap();
    entries.get(path).map_or_else(
      || {
        Err(std::io::Error::new(
          std::io::ErrorKind::NotFound,
          "File not found",
        ))
      },
      |entry| match entry {
        Entry::File { contents } => Ok(contents.clone()),
        Entry::Directory => Err(std::io::Error::new(
          std::io::ErrorKind::InvalidInput,
          "Path is a directory",
        )),
      },
    )
  }

  fn is_file(&self, path: &Path) -> bool {
    let entries = self.entries.read().unwrap();
    matches!(entries.get(path), Some(Entry::File { .. }))
  }

  fn is_dir(&self, path: &Path) -> bool {
    let entries = self.entries.read().unwrap();
    matches!(entries.get(path), Some(Entry::Directory))
  }
}
