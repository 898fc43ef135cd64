//! 错误类型（对外暴露）
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComparisonError>;

/// 构建对比视图时可能出现的错误
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// 报告顶层字段缺失或类型不符（id1/id2/similarity/matches）
    #[error("malformed report: {0}")]
    Report(String),

    /// 第 `index` 条匹配记录不合法（字段缺失、非整数、start > end）
    #[error("invalid match #{index}: {reason}")]
    Validation { index: usize, reason: String },

    /// 提交仓库中找不到该提交
    #[error("no files available for submission `{id}`")]
    Lookup { id: String },

    /// 调色板配置不合法
    #[error("invalid palette: {0}")]
    Palette(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
