use std::fs;
use std::path::Path;

use sdkgen_core::types::ScannedFile;

/// Bounds and filters for a workspace scan. Explicit data rather than
/// hard-coded literals so tests can substitute smaller fixtures.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory base-names never descended into, at any depth.
    pub excluded_dirs: Vec<String>,
    /// File extensions eligible for inclusion, without the leading dot.
    pub included_extensions: Vec<String>,
    /// Per-file byte cap, checked at stat time before reading.
    pub max_file_size: u64,
    /// Global cap on the number of included files.
    pub max_files: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: [
                "node_modules",
                ".git",
                "venv",
                "__pycache__",
                ".vscode",
                "dist",
                "build",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            included_extensions: [
                "py", "js", "ts", "jsx", "tsx", "java", "go", "rs", "json", "md",
            ]
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
            max_file_size: 100_000,
            max_files: 50,
        }
    }
}

/// Collect eligible files beneath `root`, depth first.
///
/// Per-entry I/O errors (unreadable directories, race-deleted files, bad
/// UTF-8) are logged and skipped; the scan itself cannot fail and never
/// modifies the file system. Entry order within a directory is whatever the
/// OS listing returns, so the result order is not stable across runs.
pub fn scan(root: &Path, config: &ScanConfig) -> Vec<ScannedFile> {
    let mut files = Vec::new();
    walk(root, root, config, &mut files);
    files
}

fn walk(root: &Path, dir: &Path, config: &ScanConfig, files: &mut Vec<ScannedFile>) {
    if files.len() >= config.max_files {
        return;
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("skipping unreadable directory {}: {err}", dir.display());
            return;
        }
    };

    for entry in entries {
        if files.len() >= config.max_files {
            break;
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };

        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(err) => {
                log::debug!("skipping unstatable entry {}: {err}", path.display());
                continue;
            }
        };

        // file_type() does not follow symlinks; skipping them keeps a link
        // cycle from re-listing the same directory until the cap fills with
        // duplicates.
        if file_type.is_symlink() {
            log::debug!("skipping symlink {}", path.display());
            continue;
        }

        if file_type.is_dir() {
            if config.excluded_dirs.iter().any(|excluded| *excluded == name) {
                log::debug!("not descending into excluded directory {}", path.display());
                continue;
            }
            walk(root, &path, config, files);
        } else if file_type.is_file() {
            if !has_included_extension(&path, config) {
                continue;
            }

            match fs::metadata(&path) {
                Ok(meta) if meta.len() <= config.max_file_size => {}
                Ok(meta) => {
                    log::debug!(
                        "skipping {} ({} bytes over the {} byte cap)",
                        path.display(),
                        meta.len(),
                        config.max_file_size
                    );
                    continue;
                }
                Err(err) => {
                    log::debug!("skipping unreadable file {}: {err}", path.display());
                    continue;
                }
            }

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    log::debug!("skipping unreadable file {}: {err}", path.display());
                    continue;
                }
            };

            let relative = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .to_string_lossy()
                .into_owned();

            files.push(ScannedFile {
                path: relative,
                name,
                content,
            });
        }
    }
}

fn has_included_extension(path: &Path, config: &ScanConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| config.included_extensions.iter().any(|inc| inc == ext))
        .unwrap_or(false)
}
