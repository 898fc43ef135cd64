//! 提交文件内容按行切分
use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::ordered::FileMap;
use crate::types::{SourceFile, SubmissionFile};

fn line_break() -> &'static Regex {
    static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
    LINE_BREAK.get_or_init(|| Regex::new(r"\r?\n").expect("static line-break pattern"))
}

/// 按 `\n` 或 `\r\n` 切分，不保留换行符
/// 末尾换行会产生一个空行，空文本得到单个空行
pub fn split_lines(content: &str) -> Vec<String> {
    line_break().split(content).map(str::to_string).collect()
}

/// 将 (文件名, 原文) 列表转为 文件名 -> SubmissionFile
/// 同名文件后者整体覆盖前者
pub fn build_file_index(files: &[SourceFile]) -> FileMap<SubmissionFile> {
    let mut index = FileMap::new();
    for file in files {
        let entry = SubmissionFile { lines: split_lines(&file.content), collapsed: false };
        if index.insert(file.name.as_str(), entry).is_some() {
            warn!(file = %file.name, "duplicate file name, keeping the later content");
        }
    }
    index
}

#[cfg(test)]
#[path = "files_test.rs"]
mod tests;
