//! 筛选条件解析
//!
//! 把 "1. 条件一 2. 条件二" 形式的自由文本拆成有序的条件列表。

use lazy_static::lazy_static;
use regex::Regex;

/// 解析用户输入，提取所有条件
///
/// "数字." 是唯一的结构分隔符：每个条件从一个分隔符之后开始，
/// 到下一个分隔符或文本末尾为止，去掉首尾空白。修剪后为空的
/// 条目被丢弃；编号不要求连续或唯一。
///
/// # Arguments
/// * `input` - 条件文本（换行或任意空白分隔均可）
///
/// # Returns
/// * 按输入顺序排列的非空条件列表；无分隔符时为空
pub fn parse_conditions(input: &str) -> Vec<String> {
    lazy_static! {
        static ref DELIM_RE: Regex = Regex::new(r"\d\.").unwrap();
    }

    let delims: Vec<(usize, usize)> = DELIM_RE
        .find_iter(input)
        .map(|m| (m.start(), m.end()))
        .collect();

    let mut conditions = Vec::new();
    for (i, &(_, text_start)) in delims.iter().enumerate() {
        let text_end = delims
            .get(i + 1)
            .map(|&(next_start, _)| next_start)
            .unwrap_or(input.len());
        let text = input[text_start..text_end].trim();
        if !text.is_empty() {
            conditions.push(text.to_string());
        }
    }
    conditions
}
