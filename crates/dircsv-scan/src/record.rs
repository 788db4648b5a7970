//! Per-file record building.

use dircsv_core::policy::{self, FileKind, BINARY_SENTINEL};
use dircsv_core::{ExtractError, Record, SkipReason};
use dircsv_csv::csv_safe;
use dircsv_extract::{read_unclassified, ExtractorRegistry};
use std::path::{Component, Path};
use tracing::debug;

/// Lowercase extension with its leading dot, or an empty string.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// Whether any directory component of `relative_path` is an excluded name.
///
/// The file name itself is not checked.
#[must_use]
pub fn in_excluded_dir(relative_path: &Path) -> bool {
    relative_path.parent().is_some_and(|dir| {
        dir.components().any(|component| match component {
            Component::Normal(name) => policy::is_excluded_segment(&name.to_string_lossy()),
            _ => false,
        })
    })
}

/// Content for a file outside excluded directories, already CSV-safe.
///
/// Never fails: extraction problems end up as bracketed placeholders.
#[must_use]
pub fn extract_content(extractors: &ExtractorRegistry, path: &Path, extension: &str) -> String {
    match FileKind::resolve(extension) {
        FileKind::Binary => BINARY_SENTINEL.to_string(),
        FileKind::Readable => {
            let text = extractors
                .extract(extension, path)
                .unwrap_or_else(ExtractError::into_sentinel);
            csv_safe(text.as_str())
        }
        FileKind::Target | FileKind::Unclassified => csv_safe(read_unclassified(path).as_str()),
    }
}

/// Build the record for `path`, a file somewhere below the canonical `root`.
///
/// The relative path is prefixed with the root's own name so the output stays
/// self-describing after the CSV is moved.
pub fn build_record(
    extractors: &ExtractorRegistry,
    root: &Path,
    path: &Path,
) -> Result<Record, SkipReason> {
    let under_root = path
        .strip_prefix(root)
        .map_err(|_| SkipReason::Relativize {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;
    let file_name = path
        .file_name()
        .ok_or_else(|| SkipReason::NoFileName(path.to_path_buf()))?
        .to_string_lossy()
        .into_owned();

    let relative_path = match root.file_name() {
        Some(root_name) => Path::new(root_name).join(under_root),
        None => under_root.to_path_buf(),
    };
    let extension = extension_of(path);

    let content = if in_excluded_dir(&relative_path) {
        debug!("In excluded folder, content left empty: {:?}", relative_path);
        String::new()
    } else {
        extract_content(extractors, path, &extension)
    };

    Ok(Record::new(
        relative_path.to_string_lossy(),
        file_name,
        extension,
        content,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dircsv_core::policy::BINARY_LIKE_SENTINEL;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("a/b/File.TXT")), ".txt");
        assert_eq!(extension_of(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension_of(Path::new("Makefile")), "");
        assert_eq!(extension_of(Path::new(".bashrc")), "");
        assert_eq!(extension_of(Path::new("trailing.")), "");
    }

    #[test]
    fn test_in_excluded_dir_checks_every_directory() {
        assert!(in_excluded_dir(Path::new("proj/.git/config")));
        assert!(in_excluded_dir(Path::new("proj/sub/.git/objects/ab/cd")));
        assert!(in_excluded_dir(Path::new("proj/Node_Modules/pkg/index.js")));
        assert!(in_excluded_dir(Path::new("build/readme.txt")));
    }

    #[test]
    fn test_in_excluded_dir_ignores_file_name() {
        assert!(!in_excluded_dir(Path::new("proj/build")));
        assert!(!in_excluded_dir(Path::new("proj/src/target.txt")));
        assert!(!in_excluded_dir(Path::new("a.txt")));
    }

    #[test]
    fn test_extract_content_binary_ignores_bytes() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("plain.dll");
        std::fs::write(&path, "actually readable text").unwrap();

        let registry = ExtractorRegistry::with_defaults();
        assert_eq!(extract_content(&registry, &path, ".dll"), BINARY_SENTINEL);
    }

    #[test]
    fn test_extract_content_readable_is_escaped() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("q.txt");
        std::fs::write(&path, "He said \"hi\"\nBye").unwrap();

        let registry = ExtractorRegistry::with_defaults();
        assert_eq!(
            extract_content(&registry, &path, ".txt"),
            "He said \"\"hi\"\"\\nBye"
        );
    }

    #[test]
    fn test_extract_content_target_only_uses_heuristic() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("app.sln");
        std::fs::write(&path, [0u8, 1, 2, 3]).unwrap();

        let registry = ExtractorRegistry::with_defaults();
        assert_eq!(extract_content(&registry, &path, ".sln"), BINARY_LIKE_SENTINEL);
    }

    #[test]
    fn test_extract_content_missing_readable_file() {
        let registry = ExtractorRegistry::with_defaults();
        let content = extract_content(&registry, Path::new("/nonexistent/x.txt"), ".txt");
        assert!(content.starts_with("[Error reading file: "));
    }

    #[test]
    fn test_build_record_prefixes_root_name() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("project");
        std::fs::create_dir_all(root.join("src")).unwrap();
        let path = root.join("src").join("Main.CS");
        std::fs::write(&path, "class A {}").unwrap();

        let registry = ExtractorRegistry::with_defaults();
        let record = build_record(&registry, &root, &path).unwrap();

        let expected: PathBuf = ["project", "src", "Main.CS"].iter().collect();
        assert_eq!(record.relative_path(), expected.to_string_lossy());
        assert_eq!(record.file_name(), "Main.CS");
        assert_eq!(record.file_extension(), ".cs");
        assert_eq!(record.content(), "class A {}");
    }

    #[test]
    fn test_build_record_excluded_dir_keeps_inventory() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("project");
        std::fs::create_dir_all(root.join("sub").join(".git")).unwrap();
        let path = root.join("sub").join(".git").join("ignored.txt");
        std::fs::write(&path, "secret").unwrap();

        let registry = ExtractorRegistry::with_defaults();
        let record = build_record(&registry, &root, &path).unwrap();
        assert_eq!(record.file_name(), "ignored.txt");
        assert_eq!(record.file_extension(), ".txt");
        assert_eq!(record.content(), "");
    }

    #[test]
    fn test_build_record_ignores_excluded_names_above_root() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().join("build").join("proj");
        std::fs::create_dir_all(&root).unwrap();
        let path = root.join("bin");
        std::fs::write(&path, "#!/bin/sh").unwrap();

        let registry = ExtractorRegistry::with_defaults();
        let record = build_record(&registry, &root, &path).unwrap();

        let expected: PathBuf = ["proj", "bin"].iter().collect();
        assert_eq!(record.relative_path(), expected.to_string_lossy());
        assert_eq!(record.content(), "#!/bin/sh");
    }

    #[test]
    fn test_build_record_outside_root_is_skipped() {
        let registry = ExtractorRegistry::with_defaults();
        let result = build_record(&registry, Path::new("/a/root"), Path::new("/elsewhere/f.txt"));
        assert!(matches!(result, Err(SkipReason::Relativize { .. })));
    }
}
