use clap::Parser;
use job_filter_rust::{cli, conditions, config, error, export, interactive, report, scanner};

use cli::{Cli, Commands};
use config::Config;
use error::{JobFilterError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Search {
            file,
            conditions: condition_text,
            conditions_file,
            save,
            output,
            overwrite,
            details,
        } => {
            println!("🔍 job-filter - 岗位筛选\n");

            // 1. 输入校验：文件必须存在，条件必须能解析出来
            if !file.exists() {
                return Err(JobFilterError::FileNotFound(file.display().to_string()));
            }

            let raw_conditions = match (condition_text, conditions_file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)?,
                (None, None) => config.default_conditions.clone(),
            };

            let parsed = conditions::parse_conditions(&raw_conditions);
            if parsed.is_empty() {
                return Err(JobFilterError::NoConditions);
            }

            if cli.verbose {
                println!("条件: {:?}\n", parsed);
            }

            // 2. 后台扫描
            println!("[1/2] 正在搜索...");
            let results = scanner::scan_workbook_task(file.clone(), parsed.clone()).await?;

            if results.is_empty() {
                println!("⚠ 未找到同时满足条件 {:?} 的岗位信息", parsed);
                return Ok(());
            }

            println!("✔ 搜索完成！共找到 {} 个匹配的岗位\n", results.len());
            report::print_results_table(&results);

            if details {
                for result in &results {
                    report::print_detail(result);
                }
            }

            // 3. 保存
            if save || output.is_some() {
                println!("\n[2/2] 正在保存...");
                let output_path = output.unwrap_or_else(|| export::default_output_path(&file));

                if output_path.exists() && !overwrite {
                    return Err(JobFilterError::Export(format!(
                        "文件 {} 已存在，使用 --overwrite 覆盖",
                        output_path.display()
                    )));
                }

                match export::export_results(&results, &output_path)? {
                    export::ExportOutcome::Saved(path) => {
                        println!("✔ 结果已保存到: {}", path.display())
                    }
                    export::ExportOutcome::NothingToSave => println!("没有结果可保存"),
                }
            }

            println!("\n✅ 完成");
        }

        Commands::Interactive => {
            interactive::run_interactive(&config).await?;
        }

        Commands::Config {
            set_default_conditions,
            show,
        } => {
            let mut config = config;

            if let Some(template) = set_default_conditions {
                config.set_default_conditions(template)?;
                println!("✔ 已设置默认条件模板");
            }

            if show {
                println!("设置:");
                println!("  默认条件模板: {}", config.default_conditions);
                println!("  配置文件: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
