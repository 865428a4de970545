//! 应用状态模块
//!
//! 封装进程内共享的运行配置与数据库连接。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::Database;
use crate::error::AppError;
use crate::platform::Platform;

/// 全局应用状态
pub struct AppState {
    /// 启动时探测的运行配置
    pub config: AppConfig,
    /// 数据库连接
    pub db: Arc<Database>,
}

impl AppState {
    /// 初始化应用状态
    pub fn init() -> Result<Self, AppError> {
        let config = AppConfig::detect();
        let db = Database::open(&config)?;
        Ok(Self {
            config,
            db: Arc::new(db),
        })
    }

    /// 使用内存数据库创建（用于测试）
    pub fn memory() -> Result<Self, AppError> {
        let config = AppConfig::with_home(".", Platform::current());
        let db = Database::memory()?;
        Ok(Self {
            config,
            db: Arc::new(db),
        })
    }

    /// 使用自定义配置与数据库创建
    pub fn with_database(config: AppConfig, db: Database) -> Self {
        Self {
            config,
            db: Arc::new(db),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_memory() {
        let state = AppState::memory().unwrap();
        assert!(state.db.first_run());
        assert!(state.db.list_jdks().unwrap().is_empty());
    }
}
