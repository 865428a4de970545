//! 运行时配置模块
//!
//! 解析用户主目录、数据目录与数据库文件路径。所有进程级常量在启动时
//! 构建为一个 [`AppConfig`]，随后传递给各组件，不使用散落的全局状态。

use std::path::PathBuf;

use crate::platform::Platform;

/// 数据目录名（位于用户主目录下）
pub const DATA_DIR_NAME: &str = ".java_version_manager";

/// 数据库文件名
pub const DB_FILE_NAME: &str = "main.db";

/// 获取用户主目录
///
/// 支持 JDK_SWITCH_HOME 环境变量覆盖（用于测试隔离）
pub fn get_home_dir() -> PathBuf {
    if let Ok(home) = std::env::var("JDK_SWITCH_HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    dirs::home_dir().unwrap_or_else(|| {
        log::warn!("无法获取用户主目录，回退到当前目录");
        PathBuf::from(".")
    })
}

/// 进程级运行配置
///
/// 启动时构建一次，组件只读取，不再各自探测环境。
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 用户主目录
    pub home_dir: PathBuf,
    /// 数据目录，默认 `~/.java_version_manager`
    pub data_dir: PathBuf,
    /// 数据库文件 `main.db` 的完整路径
    pub db_path: PathBuf,
    /// 当前操作系统平台
    pub platform: Platform,
}

impl AppConfig {
    /// 探测当前环境并构建配置
    pub fn detect() -> Self {
        Self::with_home(get_home_dir(), Platform::current())
    }

    /// 使用指定主目录与平台构建配置（用于测试）
    pub fn with_home(home_dir: impl Into<PathBuf>, platform: Platform) -> Self {
        let home_dir = home_dir.into();
        let data_dir = home_dir.join(DATA_DIR_NAME);
        let db_path = data_dir.join(DB_FILE_NAME);
        Self {
            home_dir,
            data_dir,
            db_path,
            platform,
        }
    }

    /// 默认登录 shell 的启动文件路径 `~/.bashrc`
    pub fn shell_profile_path(&self) -> PathBuf {
        self.home_dir.join(".bashrc")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_home_dir_override() {
        std::env::set_var("JDK_SWITCH_HOME", "/tmp/jdk-switch-test-home");
        assert_eq!(get_home_dir(), PathBuf::from("/tmp/jdk-switch-test-home"));
        std::env::remove_var("JDK_SWITCH_HOME");
    }

    #[test]
    #[serial]
    fn test_blank_override_is_ignored() {
        std::env::set_var("JDK_SWITCH_HOME", "   ");
        assert_ne!(get_home_dir(), PathBuf::from("   "));
        std::env::remove_var("JDK_SWITCH_HOME");
    }

    #[test]
    fn test_config_paths() {
        let config = AppConfig::with_home("/home/dev", Platform::Unix);
        assert_eq!(
            config.data_dir,
            PathBuf::from("/home/dev/.java_version_manager")
        );
        assert_eq!(config.db_path, config.data_dir.join("main.db"));
        assert_eq!(config.shell_profile_path(), PathBuf::from("/home/dev/.bashrc"));
    }
}
