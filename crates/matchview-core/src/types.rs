//! 公共类型（对外暴露）
use std::fmt;

use serde::{Serialize, Serializer};

use crate::ordered::FileMap;

/// 提交仓库返回的原始文件（文件名 + 完整文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name: name.into(), content: content.into() }
    }
}

/// 按行切分后的文件内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionFile {
    pub lines: Vec<String>,
    /// 显示层折叠标记，构建时恒为 false
    pub collapsed: bool,
}

/// 并排视图中的一侧：1 = 第一份提交，2 = 第二份提交
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    First,
    Second,
}

impl Panel {
    pub fn number(self) -> u8 {
        match self {
            Panel::First => 1,
            Panel::Second => 2,
        }
    }

    pub fn opposite(self) -> Panel {
        match self {
            Panel::First => Panel::Second,
            Panel::Second => Panel::First,
        }
    }
}

impl Serialize for Panel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

/// HSLA 颜色字符串，如 `hsla(20, 80%, 50%, 0.3)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(pub(crate) String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 一条已着色的匹配：两侧文件中各一段 token 区间
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub first_file: String,
    pub second_file: String,
    pub start_in_first: usize,
    pub end_in_first: usize,
    pub start_in_second: usize,
    pub end_in_second: usize,
    pub tokens: usize,
    pub color: Color,
}

impl Match {
    /// 将匹配投影到某一侧面板，链接指向对侧
    pub fn project(&self, panel: Panel) -> MatchInSingleFile {
        let linked_panel = panel.opposite();
        let (start, end) = self.range_in(panel);
        MatchInSingleFile {
            start,
            end,
            linked_panel,
            linked_file: self.file_in(linked_panel).to_string(),
            linked_line: self.range_in(linked_panel).0,
            color: self.color.clone(),
        }
    }

    /// 该匹配在某一侧的区间 (start, end)
    pub fn range_in(&self, panel: Panel) -> (usize, usize) {
        match panel {
            Panel::First => (self.start_in_first, self.end_in_first),
            Panel::Second => (self.start_in_second, self.end_in_second),
        }
    }

    /// 该匹配在某一侧所属的文件名
    pub fn file_in(&self, panel: Panel) -> &str {
        match panel {
            Panel::First => &self.first_file,
            Panel::Second => &self.second_file,
        }
    }
}

/// 单侧文件中的匹配片段，并指向对侧文件与行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInSingleFile {
    pub start: usize,
    pub end: usize,
    pub linked_panel: Panel,
    pub linked_file: String,
    pub linked_line: usize,
    pub color: Color,
}

impl MatchInSingleFile {
    /// 位置是否落在 [start, end] 内
    pub fn contains_line(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

/// 一对提交的对比视图（构建后不可变）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub first_submission_id: String,
    pub second_submission_id: String,
    pub similarity: f64,
    pub files_of_first_submission: FileMap<SubmissionFile>,
    pub files_of_second_submission: FileMap<SubmissionFile>,
    /// 与 all_matches 一一对应
    pub colors: Vec<Color>,
    pub all_matches: Vec<Match>,
    pub matches_in_first_submission: FileMap<Vec<MatchInSingleFile>>,
    pub matches_in_second_submission: FileMap<Vec<MatchInSingleFile>>,
}

impl Comparison {
    pub fn submission_id(&self, panel: Panel) -> &str {
        match panel {
            Panel::First => &self.first_submission_id,
            Panel::Second => &self.second_submission_id,
        }
    }

    pub fn files_of(&self, panel: Panel) -> &FileMap<SubmissionFile> {
        match panel {
            Panel::First => &self.files_of_first_submission,
            Panel::Second => &self.files_of_second_submission,
        }
    }

    pub fn matches_of(&self, panel: Panel) -> &FileMap<Vec<MatchInSingleFile>> {
        match panel {
            Panel::First => &self.matches_in_first_submission,
            Panel::Second => &self.matches_in_second_submission,
        }
    }

    /// 某侧某文件上的匹配片段；无匹配时为空切片
    pub fn matches_in(&self, panel: Panel, file: &str) -> &[MatchInSingleFile] {
        self.matches_of(panel).get(file).map(Vec::as_slice).unwrap_or(&[])
    }
}
