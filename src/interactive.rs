//! 交互模式
//!
//! 对应桌面界面的完整流程：输入文件路径和条件文本，后台扫描，
//! 列出结果后进入命令循环（查详情 / 保存 / 重新搜索 / 退出）。
//! 每次重新搜索都完全替换上一次的结果。

use dialoguer::{Confirm, Input};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::conditions;
use crate::config::Config;
use crate::error::{JobFilterError, Result};
use crate::export::{self, ExportOutcome};
use crate::matcher::MatchResult;
use crate::report;
use crate::scanner;

/// 结果循环里的用户操作
enum ResultAction {
    /// 查看某条结果详情（1起序号）
    Detail(usize),
    /// 保存结果
    Save,
    /// 重新搜索
    NewSearch,
    /// 退出
    Quit,
}

pub async fn run_interactive(config: &Config) -> Result<()> {
    println!("📋 job-filter - 交互模式\n");

    loop {
        // 1. 文件路径（留空退出）
        let path = match prompt_workbook_path()? {
            Some(path) => path,
            None => break,
        };

        // 2. 条件文本
        let conditions = match prompt_conditions(&config.default_conditions)? {
            Some(conditions) => conditions,
            None => continue,
        };

        // 3. 后台扫描；失败只中止本次搜索
        let results = match run_scan(&path, &conditions).await {
            Ok(results) => results,
            Err(e) => {
                println!("❌ {}\n", e);
                continue;
            }
        };

        if results.is_empty() {
            println!("⚠ 未找到同时满足条件 {:?} 的岗位信息\n", conditions);
            continue;
        }

        println!("✔ 搜索完成！共找到 {} 个匹配的岗位\n", results.len());
        report::print_results_table(&results);
        println!();

        // 4. 结果命令循环
        loop {
            match prompt_result_action(results.len())? {
                ResultAction::Detail(rank) => match report::lookup(&results, rank) {
                    Some(result) => report::print_detail(result),
                    None => println!("⚠ 序号超出范围: {}", rank),
                },
                ResultAction::Save => {
                    if let Err(e) = save_results(&results, &path) {
                        println!("❌ {}", e);
                    }
                }
                ResultAction::NewSearch => break,
                ResultAction::Quit => return Ok(()),
            }
        }
    }

    Ok(())
}

/// 扫描期间显示转圈进度；一次提交，一次返回
async fn run_scan(path: &Path, conditions: &[String]) -> Result<Vec<MatchResult>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("正在搜索...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = scanner::scan_workbook_task(path.to_path_buf(), conditions.to_vec()).await;

    spinner.finish_and_clear();
    result
}

/// 询问工作簿路径；留空表示退出，不存在的路径重新输入
fn prompt_workbook_path() -> Result<Option<PathBuf>> {
    loop {
        let text: String = Input::new()
            .with_prompt("Excel文件路径 (留空退出)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| JobFilterError::Prompt(e.to_string()))?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let path = PathBuf::from(trimmed);
        if path.exists() {
            return Ok(Some(path));
        }
        println!("❌ 文件不存在，请检查路径是否正确");
    }
}

/// 询问条件文本并解析；解析不出条件时返回 None
fn prompt_conditions(template: &str) -> Result<Option<Vec<String>>> {
    let text: String = Input::new()
        .with_prompt("筛选条件")
        .default(template.to_string())
        .interact_text()
        .map_err(|e| JobFilterError::Prompt(e.to_string()))?;

    let conditions = conditions::parse_conditions(&text);
    if conditions.is_empty() {
        println!("❌ 输入格式错误，请按照示例格式输入，如: {}\n", template);
        return Ok(None);
    }

    println!("✔ 解析到 {} 个条件: {:?}\n", conditions.len(), conditions);
    Ok(Some(conditions))
}

/// 结果命令提示
fn prompt_result_action(count: usize) -> Result<ResultAction> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("序号 [1-{}] 查详情 / s保存 / n重新搜索 / q退出", count))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| JobFilterError::Prompt(e.to_string()))?;

        match input.trim() {
            "" => continue,
            "s" | "S" => return Ok(ResultAction::Save),
            "n" | "N" => return Ok(ResultAction::NewSearch),
            "q" | "Q" => return Ok(ResultAction::Quit),
            other => match other.parse::<usize>() {
                Ok(rank) => return Ok(ResultAction::Detail(rank)),
                Err(_) => println!("⚠ 无效输入: {}", other),
            },
        }
    }
}

/// 保存结果到CSV
///
/// 默认路径已存在时询问是否覆盖；拒绝则另输路径，留空放弃保存。
fn save_results(results: &[MatchResult], workbook_path: &Path) -> Result<()> {
    let mut output = export::default_output_path(workbook_path);

    if output.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("文件 {} 已存在，是否覆盖？", output.display()))
            .default(false)
            .interact()
            .map_err(|e| JobFilterError::Prompt(e.to_string()))?;

        if !overwrite {
            let alternate: String = Input::new()
                .with_prompt("另存为 (留空取消)")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| JobFilterError::Prompt(e.to_string()))?;

            let trimmed = alternate.trim();
            if trimmed.is_empty() {
                println!("已取消保存");
                return Ok(());
            }
            output = PathBuf::from(trimmed);
        }
    }

    match export::export_results(results, &output)? {
        ExportOutcome::Saved(path) => println!("✔ 结果已保存到: {}", path.display()),
        ExportOutcome::NothingToSave => println!("没有结果可保存"),
    }
    Ok(())
}
