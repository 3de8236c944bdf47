//! Checks that `tests/unit` mirrors the module files under `src`
//!
//! Every `src/<module>/<file>.rs` needs a `tests/unit/<module>/<file>.rs` that is
//! reachable from `tests/unit/main.rs` and holds at least one test.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    fn crate_root() -> &'static Path {
        Path::new(env!("CARGO_MANIFEST_DIR"))
    }

    /// `<module>/<file>.rs` paths one directory below `root`, without `mod.rs`
    fn module_files(root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for module in fs::read_dir(root)? {
            let module = module?.path();
            if !module.is_dir() {
                continue;
            }
            for file in fs::read_dir(&module)? {
                let file = file?.path();
                let is_rust = file.extension().is_some_and(|ext| ext == "rs");
                if !is_rust || file.ends_with("mod.rs") {
                    continue;
                }
                if let Ok(relative) = file.strip_prefix(root) {
                    files.push(relative.to_path_buf());
                }
            }
        }
        files.sort();
        Ok(files)
    }

    // Tests src and tests/unit hold the same module files
    // Verified by adding a src file without a unit test file
    #[test]
    fn test_unit_tree_mirrors_src() {
        let sources = module_files(&crate_root().join("src")).unwrap();
        let units = module_files(&crate_root().join("tests/unit")).unwrap();

        let missing: Vec<_> = sources.iter().filter(|path| !units.contains(path)).collect();
        let orphaned: Vec<_> = units.iter().filter(|path| !sources.contains(path)).collect();

        assert!(!sources.is_empty());
        assert!(
            missing.is_empty(),
            "src files without unit tests: {missing:?}"
        );
        assert!(
            orphaned.is_empty(),
            "unit tests without src files: {orphaned:?}"
        );
    }

    // Tests every unit file is compiled into the unit test target
    // Verified by removing a module line from tests/unit/main.rs
    #[test]
    fn test_unit_modules_are_declared() {
        let unit_root = crate_root().join("tests/unit");
        let main = fs::read_to_string(unit_root.join("main.rs")).unwrap();

        for path in module_files(&unit_root).unwrap() {
            let (Some(module), Some(file)) = (path.parent(), path.file_stem()) else {
                continue;
            };
            let module = module.to_string_lossy();
            let file = file.to_string_lossy();
            let listing = fs::read_to_string(unit_root.join(&*module).join("mod.rs")).unwrap();

            assert!(
                main.contains(&format!("mod {module};")),
                "main.rs misses {module}"
            );
            assert!(
                listing.contains(&format!("mod {file};")),
                "{module} misses {file}"
            );
        }
    }

    // Tests no unit file is left without a test
    // Verified by emptying one unit file
    #[test]
    fn test_unit_files_contain_tests() {
        let unit_root = crate_root().join("tests/unit");

        for path in module_files(&unit_root).unwrap() {
            let content = fs::read_to_string(unit_root.join(&path)).unwrap();
            assert!(
                content.contains("#[test]"),
                "{} has no tests",
                path.display()
            );
        }
    }
}
