use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{ScanError, ScanErrorKind, ScanResult};
use crate::parser::filter::{is_view_file, VIEW_FILE_NAME};

/// How view files are located under the search root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorOptions {
    /// Exact file name to collect
    pub file_name: String,
    /// Descend into symlinked directories (cycles are skipped)
    pub follow_links: bool,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            file_name: VIEW_FILE_NAME.to_string(),
            follow_links: false,
        }
    }
}

/// Find every view file under `root`, in sorted directory-walk order with
/// each directory's files ahead of its subdirectories.
///
/// A missing root is fatal. Unreadable subdirectories and symlink loops are
/// logged and skipped.
pub fn find_view_files(root: &Path, options: &LocatorOptions) -> ScanResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(ScanError::scan(ScanErrorKind::RootNotFound {
            path: root.to_path_buf(),
        }));
    }
    if !root.is_dir() {
        return Err(ScanError::scan(ScanErrorKind::NotADirectory {
            path: root.to_path_buf(),
        }));
    }

    let mut view_files = Vec::new();

    // A directory's own files come before its subdirectories, each by name
    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.loop_ancestor().is_some() => {
                warn!("Skipping symlink cycle: {}", e);
                continue;
            }
            Err(e) if e.depth() == 0 => {
                let path = e.path().map(Path::to_path_buf);
                let io = e
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                return Err(ScanError::io(io, path));
            }
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if is_view_file(path, &options.file_name) {
            debug!("Found view file: {}", path.display());
            view_files.push(path.to_path_buf());
        }
    }

    Ok(view_files)
}
