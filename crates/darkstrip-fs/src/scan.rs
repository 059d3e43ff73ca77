//! Recursive file enumeration

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::NormalizedPath;

/// Find every file under `root` whose extension is `extension`.
///
/// A leading `.` on `extension` is ignored. Hidden entries below the root
/// are skipped. Symlinks are followed, both to files and to directories;
/// link cycles are logged and skipped. Results come back in traversal
/// order, each holding the exact native path the walk produced. A missing
/// root (or a root that is not a directory) yields an empty list.
pub fn find_files(root: &NormalizedPath, extension: &str) -> Vec<NormalizedPath> {
    let extension = extension.trim_start_matches('.');
    let native_root = root.to_native();

    if !native_root.is_dir() {
        debug!(root = %root, "scan root is not a directory, nothing to enumerate");
        return Vec::new();
    }

    let files: Vec<NormalizedPath> = WalkDir::new(native_root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(root = %root, error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == extension)
        })
        .map(|entry| NormalizedPath::new(entry.into_path()))
        .collect();

    debug!(root = %root, extension, count = files.len(), "enumerated files");
    files
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().starts_with(b".")
}
