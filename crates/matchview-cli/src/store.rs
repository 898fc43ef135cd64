//! 基于目录的提交仓库：`<root>/<submission id>/...`
use std::path::{Path, PathBuf};

use matchview_core::{AnonymousSet, SourceFile, SubmissionStore};
use tracing::warn;
use walkdir::WalkDir;

/// 每个子目录即一个提交，文件名为相对提交目录的路径（`/` 分隔）
pub struct DirectoryStore {
    root: PathBuf,
    anonymous: AnonymousSet,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), anonymous: AnonymousSet::new() }
    }

    /// 指定匿名显示的提交
    pub fn with_anonymous(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.anonymous.add(ids);
        self
    }

    fn submission_dir(&self, id: &str) -> Option<PathBuf> {
        // id 只能是单个目录名，避免逃出根目录
        if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
            return None;
        }
        let dir = self.root.join(id);
        dir.is_dir().then_some(dir)
    }
}

impl SubmissionStore for DirectoryStore {
    fn files_of_submission(&self, id: &str) -> Option<Vec<SourceFile>> {
        let dir = self.submission_dir(id)?;
        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!(%err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let bytes = match std::fs::read(entry.path()) {
                Ok(b) => b,
                Err(err) => {
                    warn!(path = %entry.path().display(), %err, "skipping unreadable file");
                    continue;
                }
            };
            let name = relative_name(&dir, entry.path());
            files.push(SourceFile::new(name, String::from_utf8_lossy(&bytes)));
        }
        Some(files)
    }

    fn display_name(&self, id: &str) -> String {
        self.anonymous.display_name(id, None)
    }
}

fn relative_name(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
