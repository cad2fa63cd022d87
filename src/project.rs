//! Project scope: which Java files exist, and where.
//!
//! The index maps a simple file name to every path that carries it (a
//! project can hold more than one `Point.java`). All index access goes
//! through [`Project::snapshot`], an RAII read guard that serializes
//! against [`Project::refresh`] rebuilding the index; the guard is the
//! "stable view" a pipeline invocation holds while it traverses files,
//! and it is released on every exit path, early aborts included.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard};

use walkdir::WalkDir;

use crate::syntax::JAVA_EXTENSION;

pub struct Project {
    root: PathBuf,
    index: RwLock<HashMap<String, Vec<PathBuf>>>,
}

impl Project {
    /// Index every Java file under `root`.
    pub fn open<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let index = build_index(&root)?;
        Ok(Self {
            root,
            index: RwLock::new(index),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rebuild the index after the tree changed on disk.
    pub fn refresh(&self) -> anyhow::Result<()> {
        let fresh = build_index(&self.root)?;
        *self.index.write().unwrap() = fresh;
        Ok(())
    }

    /// Acquire the read-scoped view used for one pipeline invocation.
    pub fn snapshot(&self) -> ProjectSnapshot<'_> {
        ProjectSnapshot {
            index: self.index.read().unwrap(),
        }
    }
}

/// A stable view of the project index, held for one traversal.
pub struct ProjectSnapshot<'a> {
    index: RwLockReadGuard<'a, HashMap<String, Vec<PathBuf>>>,
}

impl ProjectSnapshot<'_> {
    /// Every path whose simple file name is `name`, in sorted order.
    pub fn matches(&self, name: &str) -> &[PathBuf] {
        self.index.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct Java file names in the project, sorted.
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.index.keys().cloned().collect();
        names.sort();
        names
    }

    /// Total number of indexed files.
    pub fn file_count(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }
}

fn build_index(root: &Path) -> anyhow::Result<HashMap<String, Vec<PathBuf>>> {
    let mut index: HashMap<String, Vec<PathBuf>> = HashMap::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden directories
            let name = e.file_name().to_string_lossy();
            !(e.file_type().is_dir() && name.starts_with('.') && e.depth() > 0)
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(JAVA_EXTENSION) {
            index.entry(name.to_string()).or_default().push(path.to_path_buf());
        }
    }

    for paths in index.values_mut() {
        paths.sort();
    }
    Ok(index)
}
