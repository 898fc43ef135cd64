//! 提交仓库接口（由调用方注入）与内存实现
use std::collections::{HashMap, HashSet};

use crate::ordered::FileMap;
use crate::types::SourceFile;

/// 匿名提交对外显示的名称
pub const HIDDEN_NAME: &str = "Hidden";

/// 提交文件查询 + 显示名解析
pub trait SubmissionStore {
    /// 返回提交的全部文件；`None` 表示仓库中没有该提交，空列表表示提交没有文件
    fn files_of_submission(&self, id: &str) -> Option<Vec<SourceFile>>;

    /// 提交的显示名（默认即 id）
    fn display_name(&self, id: &str) -> String {
        id.to_string()
    }
}

/// 匿名显示的提交集合；各仓库实现共用同一套显示名规则
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnonymousSet {
    ids: HashSet<String>,
}

impl AnonymousSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.extend(ids.into_iter().map(Into::into));
    }

    pub fn remove<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            self.ids.remove(id.as_ref());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// 匿名 → HIDDEN_NAME；否则用已知显示名，缺省为 id
    pub fn display_name(&self, id: &str, known: Option<&str>) -> String {
        if self.contains(id) {
            return HIDDEN_NAME.to_string();
        }
        known.unwrap_or(id).to_string()
    }
}

/// 以闭包作为文件查询的仓库
pub struct FnStore<F>(pub F);

/// 用闭包构造仓库
pub fn from_fn<F>(lookup: F) -> FnStore<F>
where
    F: Fn(&str) -> Option<Vec<SourceFile>>,
{
    FnStore(lookup)
}

impl<F> SubmissionStore for FnStore<F>
where
    F: Fn(&str) -> Option<Vec<SourceFile>>,
{
    fn files_of_submission(&self, id: &str) -> Option<Vec<SourceFile>> {
        (self.0)(id)
    }
}

/// 内存提交仓库（已加载的提交 + 显示名 + 匿名集合）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    submissions: HashMap<String, FileMap<String>>,
    display_names: HashMap<String, String>,
    anonymous: AnonymousSet,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存单个文件；同一提交内同名文件会被覆盖
    pub fn add_file(&mut self, id: &str, name: impl Into<String>, content: impl Into<String>) {
        self.submissions.entry(id.to_string()).or_default().insert(name, content.into());
    }

    /// 登记一个提交（可以没有文件）
    pub fn add_submission(&mut self, id: &str, files: impl IntoIterator<Item = SourceFile>) {
        let entry = self.submissions.entry(id.to_string()).or_default();
        for f in files {
            entry.insert(f.name, f.content);
        }
    }

    pub fn set_display_name(&mut self, id: &str, name: impl Into<String>) {
        self.display_names.insert(id.to_string(), name.into());
    }

    pub fn add_anonymous<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.anonymous.add(ids);
    }

    pub fn remove_anonymous<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.anonymous.remove(ids);
    }

    pub fn reset_anonymous(&mut self) {
        self.anonymous.clear();
    }

    pub fn is_anonymous(&self, id: &str) -> bool {
        self.anonymous.contains(id)
    }

    /// 已登记的提交 id（排序后返回）
    pub fn submission_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.submissions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl SubmissionStore for MemoryStore {
    fn files_of_submission(&self, id: &str) -> Option<Vec<SourceFile>> {
        let files = self.submissions.get(id)?;
        Some(files.iter().map(|(name, content)| SourceFile::new(name, content.as_str())).collect())
    }

    fn display_name(&self, id: &str) -> String {
        self.anonymous.display_name(id, self.display_names.get(id).map(String::as_str))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
