use super::allowed_file;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists analyzable files under a root, sorted for deterministic batch
/// output.
pub fn list_source_files(root: &Path, allowed: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| allowed_file(path, allowed))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn listing_filters_by_extension_and_sorts() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("nested")).expect("nested dir should create");
        fs::write(dir.path().join("b.py"), "x = 1\n").expect("file should write");
        fs::write(dir.path().join("a.py"), "y = 2\n").expect("file should write");
        fs::write(dir.path().join("skip.rs"), "fn main() {}\n").expect("file should write");
        fs::write(dir.path().join("nested/c.js"), "var z;\n").expect("file should write");

        let allowed = vec!["py".to_string(), "js".to_string()];
        let files = list_source_files(dir.path(), &allowed);
        let names: Vec<_> = files
            .iter()
            .map(|path| {
                path.strip_prefix(dir.path())
                    .expect("path should be under root")
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        assert_eq!(names, vec!["a.py", "b.py", "nested/c.js"]);
    }

    #[test]
    fn empty_root_lists_nothing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let files = list_source_files(dir.path(), &["py".to_string()]);
        assert!(files.is_empty());
    }
}
