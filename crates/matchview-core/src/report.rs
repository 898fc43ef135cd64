//! 对比报告解析与校验（JSON）
//!
//! 报告格式：
//! `{ id1, id2, similarity, matches: [{ file1, file2, start1, end1, start2, end2, tokens }] }`
//!
//! 顶层先按 `RawReport` 反序列化，匹配数组逐条反序列化为 `MatchRecord` 并校验区间，
//! 任何缺失字段、非整数或 start > end 都会带上记录下标报错，
//! 而不是让不完整的数据流入对比视图。
use std::path::Path;

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::{ComparisonError, Result};

/// 顶层报告结构（匹配记录留待逐条解析）
#[derive(Debug, Deserialize)]
struct RawReport {
    id1: String,
    id2: String,
    similarity: f64,
    matches: Vec<Value>,
}

/// 校验通过的单条匹配记录
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchRecord {
    pub file1: String,
    pub file2: String,
    #[serde(deserialize_with = "token_index")]
    pub start1: usize,
    #[serde(deserialize_with = "token_index")]
    pub end1: usize,
    #[serde(deserialize_with = "token_index")]
    pub start2: usize,
    #[serde(deserialize_with = "token_index")]
    pub end2: usize,
    #[serde(deserialize_with = "token_index")]
    pub tokens: usize,
}

/// 校验通过的对比报告
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub id1: String,
    pub id2: String,
    pub similarity: f64,
    pub matches: Vec<MatchRecord>,
}

impl ComparisonReport {
    /// 从报告文件加载
    pub fn from_path(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)?;
        Self::from_json_str(&txt)
    }

    pub fn from_json_str(txt: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(txt)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let raw = RawReport::deserialize(value).map_err(|e| ComparisonError::Report(e.to_string()))?;

        let matches = raw
            .matches
            .iter()
            .enumerate()
            .map(|(index, m)| MatchRecord::from_value(m).map_err(|reason| ComparisonError::Validation { index, reason }))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { id1: raw.id1, id2: raw.id2, similarity: raw.similarity, matches })
    }
}

impl MatchRecord {
    /// 反序列化并校验区间；失败时返回原因（下标由调用方补充）
    fn from_value(value: &Value) -> std::result::Result<Self, String> {
        let record = MatchRecord::deserialize(value).map_err(|e| e.to_string())?;

        if record.start1 > record.end1 {
            return Err(format!("start1 ({}) is after end1 ({})", record.start1, record.end1));
        }
        if record.start2 > record.end2 {
            return Err(format!("start2 ({}) is after end2 ({})", record.start2, record.end2));
        }
        Ok(record)
    }
}

/// token 下标：接受非负整数，以及小数部分为 0 的浮点数（如 `5.0`）
fn token_index<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<usize, D::Error> {
    let n = Number::deserialize(deserializer)?;
    let whole = n.as_u64().or_else(|| {
        n.as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    });
    whole
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| D::Error::custom(format!("expected a non-negative integer, got {n}")))
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
