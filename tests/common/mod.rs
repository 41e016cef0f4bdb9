#![allow(dead_code)]

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

/// Temp sandbox holding empty `project/` and `htdocs/` directories.
pub fn setup_test_env() -> (TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    for dir in ["project", "htdocs"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    (tmp, root)
}

pub fn write_file(path: &Utf8Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Project with `{a.txt, sub/b.txt}`.
pub fn create_test_project(root: &Utf8Path) {
    write_file(&root.join("a.txt"), "a");
    write_file(&root.join("sub/b.txt"), "b");
}

/// Server root holding a previous deployment: `{old.txt, oldsub/c.txt}`.
pub fn populate_old_server(root: &Utf8Path) {
    write_file(&root.join("old.txt"), "old");
    write_file(&root.join("oldsub/c.txt"), "c");
}

/// Relative path -> contents for every file under `root`; directories map to `None`.
pub fn snapshot(root: &Utf8Path) -> BTreeMap<String, Option<String>> {
    walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let path = Utf8Path::from_path(e.path()).unwrap();
            let rel = path.strip_prefix(root).unwrap().as_str().replace('\\', "/");
            let contents = e
                .file_type()
                .is_file()
                .then(|| fs::read_to_string(path).unwrap());
            (rel, contents)
        })
        .collect()
}

pub fn listing(dir: &Utf8Path) -> Vec<String> {
    let mut names: Vec<String> = dir
        .read_dir_utf8()
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string())
        .collect();
    names.sort();
    names
}
