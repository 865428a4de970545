//! 切换命令实现
//!
//! 查询注册表并将 JAVA_HOME 切换到指定版本。

use std::io::{self, Write};

use anyhow::Result;
use jdkswitch_core::{switcher_for, AppError, AppState, RegistryService, SwitchOutcome};

use crate::output::{print_info, print_success, print_warning};

/// 版本标识查询不到记录时的提示
const INVALID_VERSION_MSG: &str = "Invalid jdk version code!";

/// 将 JAVA_HOME 切换到指定版本
pub fn run(state: &AppState, version_code: &str) -> Result<()> {
    // macOS 自带 /usr/libexec/java_home，先确认用户确实要继续
    if state.config.platform.has_native_java_home() && !confirm_continue_on_macos()? {
        return Ok(());
    }

    let switcher = switcher_for(&state.config);

    match RegistryService::switch(state, version_code, switcher.as_ref()) {
        Ok(outcome) => {
            report(outcome);
            Ok(())
        }
        Err(AppError::VersionNotFound(_)) => {
            println!("{}", INVALID_VERSION_MSG);
            show_registered(state)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// macOS 上的继续确认
fn confirm_continue_on_macos() -> Result<bool> {
    print_warning(
        "You can use /usr/libexec/java_home as an alternative in a Mac, \
         there is no need to use this program.",
    );
    print!("Enter Y/y to continue or enter any other character to stop: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// 按切换结果输出提示
fn report(outcome: SwitchOutcome) {
    match outcome {
        SwitchOutcome::ProfileUpdated { profile } => {
            print_success(&format!(
                "Command written to file succeed, please run command [source {}] to complete settings.",
                profile.display()
            ));
        }
        SwitchOutcome::ManualExportRequired { command } => {
            print_info(&format!("Run this command to finish the switch: {}", command));
        }
        SwitchOutcome::MachineScopeSet { path } => {
            print_success(&format!("Changed JAVA_HOME to {}", path));
        }
    }
}

/// 查询失败时展示已注册的版本，方便用户重试
fn show_registered(state: &AppState) -> Result<()> {
    let records = RegistryService::list(state)?;
    if records.is_empty() {
        return Ok(());
    }

    print_info("Registered versions:");
    for record in records {
        println!("  - {} ({})", record.version_code, record.path);
    }
    Ok(())
}
