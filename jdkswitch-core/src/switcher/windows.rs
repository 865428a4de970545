//! Windows 环境变量切换器
//!
//! 通过系统自带的 `setx JAVA_HOME <path> /m` 写入机器级环境变量，
//! 对之后启动的所有进程生效。

use std::process::Command;

use crate::error::AppError;
use crate::switcher::{JavaHomeSwitcher, SwitchOutcome, JAVA_HOME};

/// setx 命令名
const SETX: &str = "setx";

/// 调用系统 setx 工具的切换器
#[derive(Default)]
pub struct WindowsEnvSwitcher;

impl WindowsEnvSwitcher {
    pub fn new() -> Self {
        Self
    }
}

impl JavaHomeSwitcher for WindowsEnvSwitcher {
    fn apply(&self, path: &str) -> Result<SwitchOutcome, AppError> {
        log::debug!("执行: {} {} {} /m", SETX, JAVA_HOME, path);

        let status = Command::new(SETX)
            .args([JAVA_HOME, path, "/m"])
            .status()
            .map_err(|e| AppError::IoContext {
                context: format!("无法执行 {}", SETX),
                source: e,
            })?;

        if !status.success() {
            return Err(AppError::CommandFailed {
                program: SETX.to_string(),
                status,
            });
        }

        Ok(SwitchOutcome::MachineScopeSet {
            path: path.to_string(),
        })
    }
}
