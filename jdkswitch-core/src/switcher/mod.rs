//! JAVA_HOME 切换模块
//!
//! 按平台提供 JAVA_HOME 的持久化策略，每个平台一个实现：
//! - 类 Unix：向 `~/.bashrc` 追加 export 语句
//! - macOS：仅报告 export 命令，不落盘（系统自带 /usr/libexec/java_home，
//!   详见 DESIGN.md 中对该行为的说明）
//! - Windows：调用 `setx /m` 写入机器级环境变量
//!
//! 切换不会影响当前 shell，用户需要重新加载配置或开启新会话。

mod shell;
mod windows;

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::platform::Platform;

pub use shell::ShellProfileSwitcher;
pub use windows::WindowsEnvSwitcher;

/// 环境变量名
pub const JAVA_HOME: &str = "JAVA_HOME";

/// 切换结果
///
/// 描述本次 apply 实际做了什么，由调用方决定如何向用户呈现。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// 已向 shell 启动文件追加 export 语句
    ProfileUpdated {
        /// 被追加的配置文件
        profile: PathBuf,
    },
    /// 未写入任何文件，用户需自行执行 export 命令
    ManualExportRequired {
        /// 建议执行的命令
        command: String,
    },
    /// 已通过系统工具写入机器级环境变量
    MachineScopeSet {
        /// 写入的 JDK 路径
        path: String,
    },
}

/// JAVA_HOME 切换器
///
/// 每个平台一个实现，在启动时按 [`AppConfig`] 选择一次。
pub trait JavaHomeSwitcher {
    /// 将指定路径设为 JAVA_HOME（面向未来的 shell 会话）
    fn apply(&self, path: &str) -> Result<SwitchOutcome, AppError>;
}

/// 按平台选择切换器
pub fn switcher_for(config: &AppConfig) -> Box<dyn JavaHomeSwitcher> {
    match config.platform {
        Platform::Unix => Box::new(ShellProfileSwitcher::new(config.shell_profile_path())),
        Platform::MacOs => Box::new(MacosAdvisorySwitcher),
        Platform::Windows => Box::new(WindowsEnvSwitcher::new()),
    }
}

/// 生成 export 语句
pub(crate) fn export_command(path: &str) -> String {
    format!("export {}={}", JAVA_HOME, path)
}

/// macOS 切换器
///
/// 只报告需要执行的 export 命令，不修改任何文件。
pub struct MacosAdvisorySwitcher;

impl JavaHomeSwitcher for MacosAdvisorySwitcher {
    fn apply(&self, path: &str) -> Result<SwitchOutcome, AppError> {
        log::debug!("macos: 仅报告 export 命令，不写入配置文件");

        Ok(SwitchOutcome::ManualExportRequired {
            command: export_command(path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_command() {
        assert_eq!(
            export_command("/usr/lib/jvm/java-17"),
            "export JAVA_HOME=/usr/lib/jvm/java-17"
        );
    }

    #[test]
    fn test_macos_switcher_writes_nothing() {
        let outcome = MacosAdvisorySwitcher.apply("/opt/jdk-21").unwrap();
        assert_eq!(
            outcome,
            SwitchOutcome::ManualExportRequired {
                command: "export JAVA_HOME=/opt/jdk-21".to_string(),
            }
        );
    }

    #[test]
    fn test_switcher_for_unix_appends_to_profile() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::with_home(dir.path(), Platform::Unix);

        let outcome = switcher_for(&config).apply("/opt/jdk-17").unwrap();
        assert_eq!(
            outcome,
            SwitchOutcome::ProfileUpdated {
                profile: dir.path().join(".bashrc"),
            }
        );
    }
}
