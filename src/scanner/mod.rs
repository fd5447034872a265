//! 工作簿扫描
//!
//! 打开 Excel 工作簿，按工作表顺序逐行匹配全部条件。
//! 扫描是唯一的长耗时操作，放到后台阻塞线程执行，
//! 一次提交一次返回，中途不可取消。

mod cell;

use calamine::{open_workbook_auto, Reader};
use std::path::{Path, PathBuf};

use crate::error::{JobFilterError, Result};
use crate::matcher::{self, MatchResult, RowData};

/// 扫描整个工作簿，返回同时满足全部条件的所有行
///
/// 工作表按工作簿原始顺序遍历，表内按行顺序，序号跨表统一编号。
/// 任何读取错误都会中止整个扫描，携带原始错误信息返回，
/// 不保留部分结果。
pub fn scan_workbook(path: &Path, conditions: &[String]) -> Result<Vec<MatchResult>> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| JobFilterError::Scan(e.to_string()))?;

    let mut results = Vec::new();

    for sheet_name in workbook.sheet_names().to_vec() {
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| JobFilterError::Scan(e.to_string()))?;

        let mut rows = range.rows();

        // 第一行作为表头；没有数据行的工作表整体跳过
        let header = match rows.next() {
            Some(cells) => column_names(cells),
            None => continue,
        };

        for (data_idx, cells) in rows.enumerate() {
            let row: RowData = header
                .iter()
                .cloned()
                .zip(cells.iter().map(cell::convert_cell))
                .collect();

            if let Some(evidence) = matcher::match_row(&row, conditions) {
                results.push(MatchResult {
                    sheet: sheet_name.clone(),
                    row_number: data_idx + 2, // Excel行号从1开始，加上表头行
                    evidence,
                    row,
                });
            }
        }
    }

    Ok(results)
}

/// 在后台阻塞线程上执行扫描
///
/// 调用方 await 一次即得到完整结果或失败，对应一次搜索提交。
pub async fn scan_workbook_task(
    path: PathBuf,
    conditions: Vec<String>,
) -> Result<Vec<MatchResult>> {
    tokio::task::spawn_blocking(move || scan_workbook(&path, &conditions))
        .await
        .map_err(|e| JobFilterError::Scan(e.to_string()))?
}

/// 表头行转列名；空表头用 "列N" 占位
fn column_names(header: &[calamine::Data]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(idx, data)| {
            cell::convert_cell(data)
                .to_display()
                .unwrap_or_else(|| format!("列{}", idx + 1))
        })
        .collect()
}
