//! CSV 写出
//!
//! UTF-8 带 BOM（Windows Excel 直接打开不乱码），逗号分隔。
//! 表头为所有结果行列名的并集（按首次出现顺序），末尾追加
//! matched_sheet / matched_row / matched_details 三列。

use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::matcher::MatchResult;
use crate::report;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

pub const SHEET_COLUMN: &str = "matched_sheet";
pub const ROW_COLUMN: &str = "matched_row";
pub const DETAILS_COLUMN: &str = "matched_details";

/// 所有结果行列名的并集，保持首次出现顺序
///
/// 某些行缺少的列在其记录里写空串。
pub fn union_columns(results: &[MatchResult]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for result in results {
        for (col_name, _) in &result.row {
            if !columns.iter().any(|c| c == col_name) {
                columns.push(col_name.clone());
            }
        }
    }
    columns
}

/// 把全部结果写成一个 CSV 文件
pub fn write_csv(results: &[MatchResult], output: &Path) -> Result<()> {
    let columns = union_columns(results);

    let mut file = File::create(output)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = WriterBuilder::new().from_writer(file);

    let mut header: Vec<&str> = columns.iter().map(|c| c.as_str()).collect();
    header.push(SHEET_COLUMN);
    header.push(ROW_COLUMN);
    header.push(DETAILS_COLUMN);
    writer.write_record(&header)?;

    for result in results {
        let mut record: Vec<String> = columns
            .iter()
            .map(|col_name| cell_text(result, col_name))
            .collect();
        record.push(result.sheet.clone());
        record.push(result.row_number.to_string());
        record.push(report::joined_evidence(result));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// 行内取某列的导出文本；缺列或空单元格写空串
fn cell_text(result: &MatchResult, col_name: &str) -> String {
    result
        .row
        .iter()
        .find(|(name, _)| name == col_name)
        .and_then(|(_, value)| value.to_display())
        .unwrap_or_default()
}
