use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobFilterError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("输入格式错误，未解析到任何筛选条件。格式示例: \"1. 电气工程 2. 江苏省\"")]
    NoConditions,

    #[error("搜索过程中出错: {0}")]
    Scan(String),

    #[error("保存文件时出错: {0}")]
    Export(String),

    #[error("CSV写入错误: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("交互输入错误: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, JobFilterError>;
