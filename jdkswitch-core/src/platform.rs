//! 操作系统平台检测模块
//!
//! 定义支持的平台类型，JAVA_HOME 的持久化策略按平台选择。

use std::fmt;

/// 支持的平台类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux 及其他类 Unix 系统
    Unix,
    /// macOS（系统自带 /usr/libexec/java_home）
    MacOs,
    /// Windows
    Windows,
}

impl Platform {
    /// 探测当前运行平台
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// 从操作系统名称解析平台
    ///
    /// 未知系统一律按类 Unix 处理
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            _ => Self::Unix,
        }
    }

    /// 获取平台的字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        }
    }

    /// 该平台是否自带原生 JDK 定位工具
    ///
    /// macOS 提供 `/usr/libexec/java_home`，切换前需要用户确认继续
    pub fn has_native_java_home(&self) -> bool {
        matches!(self, Self::MacOs)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
