//! 对比视图核心库
//!
//! 设计要点：
//! - 输入为一份“两两对比”报告（匹配的 token 区间列表）与注入的提交仓库。
//! - 输出为可直接并排渲染的 `Comparison`：两侧按行切分的文件、每条匹配一种颜色、两侧按文件分组的匹配索引（带对侧链接）。
//! - 纯同步变换，不做 I/O，不缓存；相同输入得到结构相同的结果。
//! - 报告先经过校验再构建，缺失字段/非法区间不会静默流入结果。

mod builder;
mod colors;
mod error;
mod files;
mod matches;
mod options;
mod ordered;
mod report;
mod store;
mod types;

pub use builder::{build_comparison, ComparisonBuilder};
pub use colors::{generate_colors, generate_hues_for_interval, Hsla, HueBand, Palette};
pub use error::{ComparisonError, Result};
pub use files::{build_file_index, split_lines};
pub use matches::{build_indices, group_by_file, sorted_by_position, MatchIndex};
pub use options::{resolve_threads, ViewerConfig};
pub use ordered::FileMap;
pub use report::{ComparisonReport, MatchRecord};
pub use store::{from_fn, AnonymousSet, FnStore, MemoryStore, SubmissionStore, HIDDEN_NAME};
pub use types::{Color, Comparison, Match, MatchInSingleFile, Panel, SourceFile, SubmissionFile};
