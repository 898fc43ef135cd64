//! 匹配按文件分组（双向索引）
use crate::ordered::FileMap;
use crate::types::{Match, MatchInSingleFile, Panel};

/// 单侧索引：文件名 -> 该文件上的匹配片段（保持输入顺序）
pub type MatchIndex = FileMap<Vec<MatchInSingleFile>>;

/// 为两侧各建一份索引
/// - 每条匹配在两侧各贡献恰好一项
/// - 同一文件内的顺序与输入顺序一致，不按坐标重排、不去重
/// - 未出现在任何匹配中的文件不会成为键
pub fn build_indices(matches: &[Match]) -> (MatchIndex, MatchIndex) {
    (group_by_file(matches, Panel::First), group_by_file(matches, Panel::Second))
}

/// 按某一侧的文件名分组
pub fn group_by_file(matches: &[Match], panel: Panel) -> MatchIndex {
    let mut index = MatchIndex::new();
    for m in matches {
        index.get_or_insert_with(m.file_in(panel), Vec::new).push(m.project(panel));
    }
    index
}

/// 返回按位置排序的副本：start 升序 → end 升序；相同位置保持原顺序
pub fn sorted_by_position(entries: &[MatchInSingleFile]) -> Vec<MatchInSingleFile> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
    sorted
}

#[cfg(test)]
#[path = "matches_test.rs"]
mod tests;
