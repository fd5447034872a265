//! 结果展示
//!
//! 按序号列出全部匹配行，支持按序号回查单行完整数据。

use crate::matcher::MatchResult;

/// 把一条结果的证据列表拼成展示串
pub fn joined_evidence(result: &MatchResult) -> String {
    result.evidence.join("; ")
}

/// 打印结果表：序号 / 工作表 / 行号 / 匹配详情
pub fn print_results_table(results: &[MatchResult]) {
    println!("{:<6}{:<14}{:<8}{}", "序号", "工作表", "行号", "匹配详情");
    for (i, result) in results.iter().enumerate() {
        println!(
            "{:<6}{:<14}{:<8}{}",
            i + 1,
            result.sheet,
            result.row_number,
            joined_evidence(result)
        );
    }
}

/// 按序号（1起）取单条结果；越界返回 None
pub fn lookup(results: &[MatchResult], rank: usize) -> Option<&MatchResult> {
    if rank == 0 {
        return None;
    }
    results.get(rank - 1)
}

/// 打印单行详情：证据 + 完整数据（空单元格省略）
pub fn print_detail(result: &MatchResult) {
    println!("\n详情 - {} 第{}行", result.sheet, result.row_number);
    println!("匹配详情:");
    for entry in &result.evidence {
        println!("  • {}", entry);
    }
    println!("完整数据:");
    for (col_name, value) in &result.row {
        if let Some(text) = value.to_display() {
            println!("  {}: {}", col_name, text);
        }
    }
    println!();
}
