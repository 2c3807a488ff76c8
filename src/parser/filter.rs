use std::path::Path;

/// Name of the file that holds a Perspective view definition
pub const VIEW_FILE_NAME: &str = "view.json";

/// Return true if the path is an existing file named exactly `file_name`
pub fn is_view_file(path: &Path, file_name: &str) -> bool {
    path.file_name().is_some_and(|name| name == file_name) && path.is_file()
}
