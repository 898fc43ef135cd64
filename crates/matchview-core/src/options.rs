//! 构建选项（可由 TOML 配置文件加载）
use std::path::Path;

use serde::Deserialize;

use crate::colors::Palette;
use crate::error::Result;

/// 视图构建配置
///
/// ```toml
/// threads = 4
///
/// [palette]
/// alpha = 0.3
/// first_band = { start = 20, end = 80 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// 着色参数
    pub palette: Palette,
    /// 批量构建线程数：None 表示自动（等于 CPU 核数）；Some(1) 走串行
    pub threads: Option<usize>,
}

impl ViewerConfig {
    /// 从 TOML 文件加载并校验
    pub fn from_path(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)?;
        Self::from_toml_str(&txt)
    }

    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let config: ViewerConfig = toml::from_str(txt)?;
        config.palette.validate()?;
        Ok(config)
    }

    /// 实际使用的线程数（至少为 1）
    pub fn resolved_threads(&self) -> usize {
        resolve_threads(self.threads)
    }
}

/// None → CPU 核数；0 视为 1
pub fn resolve_threads(threads: Option<usize>) -> usize {
    threads.unwrap_or_else(num_cpus::get).max(1)
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
