//! 匹配结果类型

/// 单元格的值
///
/// 空单元格在搜索文本与导出中都不产生任何内容。
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// 搜索与导出共用的字符串化规则
    ///
    /// 整数值不带 ".0" 后缀，保证搜索文本可复现；空单元格
    /// （包括空字符串文本）返回 None，不产生占位内容。
    pub fn to_display(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) if s.is_empty() => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    Some(format!("{}", *n as i64))
                } else {
                    Some(n.to_string())
                }
            }
            CellValue::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        }
    }
}

/// 一行数据：按列顺序的 列名 -> 单元格值
pub type RowData = Vec<(String, CellValue)>;

/// 同时满足全部条件的一行
///
/// 序号（1起）由结果序列中的最终位置决定，跨工作表统一编号。
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// 所在工作表名
    pub sheet: String,
    /// 显示行号（数据行下标 + 2，含表头偏移）
    pub row_number: usize,
    /// 每个命中条件的匹配证据
    pub evidence: Vec<String>,
    /// 完整行数据（保留空单元格，展示与导出时按需省略）
    pub row: RowData,
}
