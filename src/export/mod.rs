//! 结果导出
//!
//! 默认输出路径由输入工作簿路径派生：去扩展名 + "_filtered_results.csv"。
//! 是否覆盖已有文件由调用方决定。

pub mod csv;

use std::path::{Path, PathBuf};

use crate::error::{JobFilterError, Result};
use crate::matcher::MatchResult;

/// 输出文件名的固定后缀
pub const OUTPUT_SUFFIX: &str = "_filtered_results";

/// 一次导出的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// 已写出文件
    Saved(PathBuf),
    /// 没有结果可保存，未写任何文件
    NothingToSave,
}

/// 由输入工作簿路径派生默认输出路径
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = format!("{}{}.csv", stem, OUTPUT_SUFFIX);
    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// 把当前结果集写到指定路径
///
/// 结果为空时不写文件，返回 NothingToSave。写入失败时内存中的
/// 结果不受影响，可换路径重新导出。
pub fn export_results(results: &[MatchResult], output: &Path) -> Result<ExportOutcome> {
    if results.is_empty() {
        return Ok(ExportOutcome::NothingToSave);
    }

    csv::write_csv(results, output).map_err(|e| JobFilterError::Export(e.to_string()))?;

    Ok(ExportOutcome::Saved(output.to_path_buf()))
}
