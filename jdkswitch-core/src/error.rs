//! 统一错误类型模块
//!
//! 定义应用中使用的所有错误类型，支持详细的错误上下文和链式错误追踪。

use std::path::Path;
use std::process::ExitStatus;
use std::sync::PoisonError;
use thiserror::Error;

/// 应用统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),

    /// IO 错误（带路径上下文）
    #[error("IO 错误: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// IO 错误（带自定义上下文）
    #[error("{context}: {source}")]
    IoContext {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// 数据库错误
    #[error("数据库错误: {0}")]
    Database(String),

    /// 版本标识已注册
    #[error("版本标识已注册: {0}")]
    DuplicateVersion(String),

    /// 版本标识不存在
    #[error("版本标识不存在: {0}")]
    VersionNotFound(String),

    /// 外部命令执行失败
    #[error("命令 {program} 执行失败: {status}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
    },

    /// 锁获取失败
    #[error("锁获取失败: {0}")]
    Lock(String),
}

impl AppError {
    /// 创建 IO 错误
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(err: PoisonError<T>) -> Self {
        Self::Lock(err.to_string())
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::IoContext {
            context: "IO 操作失败".to_string(),
            source: err,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AppError>;
