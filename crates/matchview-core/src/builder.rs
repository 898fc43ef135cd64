//! 对比视图构建主流程与批量并行调度
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::colors::Palette;
use crate::error::{ComparisonError, Result};
use crate::files::build_file_index;
use crate::matches::build_indices;
use crate::ordered::FileMap;
use crate::report::{ComparisonReport, MatchRecord};
use crate::store::SubmissionStore;
use crate::types::{Color, Comparison, Match, SubmissionFile};

/// 对比视图构建器（仅持有调色板，构建过程无状态）
#[derive(Debug, Clone, Default)]
pub struct ComparisonBuilder {
    palette: Palette,
}

impl ComparisonBuilder {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// 由报告与提交仓库构建对比视图
    /// 流程：解析两侧文件 → 按匹配数生成颜色 → 匹配着色 → 建双向索引 → 组装
    pub fn build<S>(&self, report: &ComparisonReport, store: &S) -> Result<Comparison>
    where
        S: SubmissionStore + ?Sized,
    {
        debug!(id1 = %report.id1, id2 = %report.id2, matches = report.matches.len(), "building comparison");

        let files_of_first = resolve_files(store, &report.id1)?;
        let files_of_second = resolve_files(store, &report.id2)?;

        let colors = self.palette.generate(report.matches.len());
        let all_matches: Vec<Match> = report
            .matches
            .iter()
            .zip(colors.iter())
            .map(|(record, color)| colored_match(record, color))
            .collect();

        let (matches_in_first, matches_in_second) = build_indices(&all_matches);
        trace!(
            first_files = files_of_first.len(),
            second_files = files_of_second.len(),
            first_matched = matches_in_first.len(),
            second_matched = matches_in_second.len(),
            "indices built"
        );

        Ok(Comparison {
            first_submission_id: report.id1.clone(),
            second_submission_id: report.id2.clone(),
            similarity: report.similarity,
            files_of_first_submission: files_of_first,
            files_of_second_submission: files_of_second,
            colors,
            all_matches,
            matches_in_first_submission: matches_in_first,
            matches_in_second_submission: matches_in_second,
        })
    }

    /// 批量构建多个互不相关的对比视图
    /// - threads 为 Some(1) 时串行，其余在 Rayon 线程池中并行
    /// - 结果与输入一一对应、顺序一致；单个失败不影响其余
    pub fn build_all<S>(&self, reports: &[ComparisonReport], store: &S, threads: Option<usize>) -> Result<Vec<Result<Comparison>>>
    where
        S: SubmissionStore + Sync + ?Sized,
    {
        let threads = crate::options::resolve_threads(threads);
        debug!(reports = reports.len(), threads, "building comparisons");

        if threads <= 1 {
            return Ok(reports.iter().map(|r| self.build(r, store)).collect());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;
        Ok(pool.install(|| reports.par_iter().map(|r| self.build(r, store)).collect()))
    }
}

/// 使用默认调色板构建
pub fn build_comparison<S>(report: &ComparisonReport, store: &S) -> Result<Comparison>
where
    S: SubmissionStore + ?Sized,
{
    ComparisonBuilder::default().build(report, store)
}

fn resolve_files<S>(store: &S, id: &str) -> Result<FileMap<SubmissionFile>>
where
    S: SubmissionStore + ?Sized,
{
    let files = store
        .files_of_submission(id)
        .ok_or_else(|| ComparisonError::Lookup { id: id.to_string() })?;
    Ok(build_file_index(&files))
}

fn colored_match(record: &MatchRecord, color: &Color) -> Match {
    Match {
        first_file: record.file1.clone(),
        second_file: record.file2.clone(),
        start_in_first: record.start1,
        end_in_first: record.end1,
        start_in_second: record.start2,
        end_in_second: record.end2,
        tokens: record.tokens,
        color: color.clone(),
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
