//! 行匹配
//!
//! 把一行拼成可搜索文本，检查是否同时包含全部条件，并记录匹配证据。

mod types;

pub use types::{CellValue, MatchResult, RowData};

/// 把整行非空单元格拼成搜索文本（按列顺序，单个空格分隔）
pub fn build_row_text(row: &RowData) -> String {
    row.iter()
        .filter_map(|(_, value)| value.to_display())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 检查一行是否同时包含所有条件
///
/// 区分大小写的子串匹配，不做任何规整。全部命中时返回证据列表；
/// 任一条件未命中立即中断，之前已收集的证据随行一起丢弃。
pub fn match_row(row: &RowData, conditions: &[String]) -> Option<Vec<String>> {
    let row_text = build_row_text(row);
    let mut evidence = Vec::new();

    for condition in conditions {
        if !row_text.contains(condition.as_str()) {
            return None;
        }
        if let Some(entry) = first_match_evidence(row, condition) {
            evidence.push(entry);
        }
    }

    Some(evidence)
}

/// 按列顺序找第一个包含条件的非空单元格
///
/// 每个条件只记录一次匹配。条件跨单元格命中（借助拼接空格）时
/// 没有单独的列能包含它，返回 None，该行仍算匹配。
fn first_match_evidence(row: &RowData, condition: &str) -> Option<String> {
    for (col_name, value) in row {
        if let Some(cell_str) = value.to_display() {
            if cell_str.contains(condition) {
                return Some(format!("'{}' 在列 '{}': {}", condition, col_name, cell_str));
            }
        }
    }
    None
}
