//! Test utilities for sysconf unit tests.
//!
//! Provides an in-memory [`DirProbe`] so package-root detection can be
//! tested without touching the real filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use sysconf::test_support::MockDirs;
//!
//! let dirs = MockDirs::new().with_dir("/sw");
//! let resolver = ConfigResolver::new(&dirs);
//! ```

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use crate::probe::DirProbe;

/// Mock directory tree for probe tests.
///
/// Paths registered with [`MockDirs::with_error`] fail their check with
/// `PermissionDenied`. Every check is recorded.
#[derive(Debug, Default)]
pub struct MockDirs {
    dirs: Vec<PathBuf>,
    errors: Vec<PathBuf>,
    checked: RefCell<Vec<PathBuf>>,
}

impl MockDirs {
    /// Create an empty mock tree.
    pub fn new() -> Self {
        MockDirs::default()
    }

    /// Add an existing directory.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.dirs.push(path.as_ref().to_path_buf());
        self
    }

    /// Add a path whose check fails.
    pub fn with_error(mut self, path: impl AsRef<Path>) -> Self {
        self.errors.push(path.as_ref().to_path_buf());
        self
    }

    /// Paths checked so far, in order.
    pub fn checked(&self) -> Vec<PathBuf> {
        self.checked.borrow().clone()
    }
}

impl DirProbe for MockDirs {
    fn dir_exists(&self, path: &Path) -> io::Result<bool> {
        self.checked.borrow_mut().push(path.to_path_buf());

        if self.errors.iter().any(|p| p == path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        Ok(self.dirs.iter().any(|p| p == path))
    }
}
