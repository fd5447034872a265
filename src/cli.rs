use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-filter")]
#[command(about = "岗位筛选工具 - 多条件同时匹配", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 按条件搜索工作簿并列出全部匹配行
    Search {
        /// Excel文件路径
        #[arg(required = true)]
        file: PathBuf,

        /// 筛选条件，格式: "1. 条件一 2. 条件二"（缺省用配置中的模板）
        #[arg(short, long)]
        conditions: Option<String>,

        /// 从文本文件读取筛选条件
        #[arg(long)]
        conditions_file: Option<PathBuf>,

        /// 搜索后把结果保存为CSV
        #[arg(short, long)]
        save: bool,

        /// 输出文件路径（默认: <输入文件>_filtered_results.csv）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 覆盖已存在的输出文件
        #[arg(short = 'y', long)]
        overwrite: bool,

        /// 同时打印每条结果的完整行数据
        #[arg(long)]
        details: bool,
    },

    /// 交互模式：输入文件与条件，查看详情并保存结果
    Interactive,

    /// 显示/编辑配置
    Config {
        /// 设置默认条件模板
        #[arg(long)]
        set_default_conditions: Option<String>,

        /// 显示当前配置
        #[arg(long)]
        show: bool,
    },
}
